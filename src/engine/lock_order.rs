use crate::models::{Account, BalanceGuard};

/// The locks of two distinct accounts, held together.
///
/// The lock of the account with the lexicographically larger id is always taken
/// first, whichever role the account plays in the caller. Every path that holds
/// two account locks at once must go through [`LockedPair::acquire`].
pub struct LockedPair<'a> {
    // Fields drop in declaration order, so `second` is released before `first`.
    second: BalanceGuard<'a>,
    first: BalanceGuard<'a>,
    left_first: bool
}

impl<'a> LockedPair<'a> {
    /// Locks `left` and `right`, which must be different accounts.
    pub fn acquire(left: &'a Account, right: &'a Account) -> Self {
        debug_assert_ne!(left.account_id, right.account_id, "a single account cannot be locked twice");

        let left_first = left.account_id > right.account_id;
        let (larger, smaller) = if left_first { (left, right) } else { (right, left) };

        let first = larger.lock();
        let second = smaller.lock();

        Self { second, first, left_first }
    }

    pub fn left(&mut self) -> &mut BalanceGuard<'a> {
        if self.left_first { &mut self.first } else { &mut self.second }
    }

    pub fn right(&mut self) -> &mut BalanceGuard<'a> {
        if self.left_first { &mut self.second } else { &mut self.first }
    }
}
