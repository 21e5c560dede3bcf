use crate::marshal::{ComponentType, TupleType};

impl TupleType {
    /// Values written under `previous` keep decoding and keep their order under `self`.
    ///
    /// Components may only be appended: `previous` must be a tuple type no longer than `self`,
    /// and each shared position must be order-compatible.
    pub fn is_compatible_with(&self, previous: &dyn ComponentType) -> bool {
        self.shared_positions_satisfy(previous, |tnew, tprev| tnew.is_compatible_with(tprev))
    }

    /// Like [`Self::is_compatible_with`], but shared positions need only be value-compatible.
    pub fn is_value_compatible_with(&self, previous: &dyn ComponentType) -> bool {
        self.shared_positions_satisfy(previous, |tnew, tprev| {
            tnew.is_value_compatible_with(tprev)
        })
    }

    fn shared_positions_satisfy<F>(&self, previous: &dyn ComponentType, check: F) -> bool
    where
        F: Fn(&dyn ComponentType, &dyn ComponentType) -> bool,
    {
        let Some(previous) = previous.as_any().downcast_ref::<TupleType>() else {
            return false;
        };
        if self.size() < previous.size() {
            return false;
        }
        self.types
            .iter()
            .zip(previous.types.iter())
            .all(|(tnew, tprev)| check(tnew.as_ref(), tprev.as_ref()))
    }

    pub fn references(&self, check: &dyn ComponentType) -> bool {
        self.equals(check) || self.types.iter().any(|t| t.references(check))
    }
}
