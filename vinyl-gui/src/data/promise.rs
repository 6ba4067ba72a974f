use druid::Data;

use crate::error::Error;

/// View state of an asynchronously fetched value.  `D` is the deferral
/// token: a fetch is requested by moving into `Deferred`, and a completed
/// request may only land while its token is still the current one.
#[derive(Clone, Debug, Data)]
pub enum Promise<T: Data, D: Data = (), E: Data = Error> {
    Empty,
    Deferred { def: D },
    Resolved { def: D, val: T },
    Rejected { def: D, err: E },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PromiseState {
    Empty,
    Deferred,
    Resolved,
    Rejected,
}

impl<T: Data, D: Data, E: Data> Promise<T, D, E> {
    pub fn state(&self) -> PromiseState {
        match self {
            Self::Empty => PromiseState::Empty,
            Self::Deferred { .. } => PromiseState::Deferred,
            Self::Resolved { .. } => PromiseState::Resolved,
            Self::Rejected { .. } => PromiseState::Rejected,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_deferred(&self, def: &D) -> bool
    where
        D: PartialEq,
    {
        matches!(self, Self::Deferred { def: d } if d == def)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    pub fn contains(&self, def: &D) -> bool
    where
        D: PartialEq,
    {
        matches!(
            self,
            Self::Deferred { def: d }
            | Self::Resolved { def: d, .. }
            | Self::Rejected { def: d, .. }
            if d == def
        )
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved { val, .. } => Some(val),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn defer(&mut self, def: D) {
        *self = Self::Deferred { def };
    }

    pub fn resolve(&mut self, def: D, val: T) {
        *self = Self::Resolved { def, val };
    }

    pub fn reject(&mut self, def: D, err: E) {
        *self = Self::Rejected { def, err };
    }

    /// Apply a completed request.  The result is discarded unless the
    /// promise is still deferred with the same token, so of two
    /// overlapping fetches the last-requested one wins.
    pub fn update(&mut self, (def, res): (D, Result<T, E>))
    where
        D: PartialEq,
    {
        if self.is_deferred(&def) {
            match res {
                Ok(val) => self.resolve(def, val),
                Err(err) => self.reject(def, err),
            }
        }
    }
}

impl<T: Data, D: Data, E: Data> Default for Promise<T, D, E> {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_clear_resets() {
        let mut p: Promise<u32, String> = Promise::default();
        assert!(p.is_empty());
        p.defer("a1".to_string());
        p.clear();
        assert!(p.is_empty());
    }

    #[test]
    fn defer_is_a_synchronous_transition() {
        let mut p: Promise<u32, String> = Promise::Empty;
        p.defer("a1".to_string());
        assert_eq!(p.state(), PromiseState::Deferred);
        assert!(p.is_deferred(&"a1".to_string()));
    }

    #[test]
    fn update_resolves_a_matching_deferral() {
        let mut p: Promise<u32, String> = Promise::Empty;
        p.defer("a1".to_string());
        p.update(("a1".to_string(), Ok(7)));
        assert_eq!(p.resolved(), Some(&7));
    }

    #[test]
    fn update_rejects_on_error_never_resolves() {
        let mut p: Promise<u32, String> = Promise::Empty;
        p.defer("missing".to_string());
        p.update(("missing".to_string(), Err(Error::Http(404))));
        assert!(p.is_rejected());
        assert_eq!(p.resolved(), None);
    }

    #[test]
    fn update_discards_a_stale_deferral() {
        let mut p: Promise<u32, String> = Promise::Empty;
        p.defer("a1".to_string());
        p.defer("a2".to_string());
        // "a1" completes after "a2" was requested; its result must not land.
        p.update(("a1".to_string(), Ok(1)));
        assert!(p.is_deferred(&"a2".to_string()));
        p.update(("a2".to_string(), Ok(2)));
        assert_eq!(p.resolved(), Some(&2));
    }

    #[test]
    fn update_leaves_a_settled_promise_alone() {
        let mut p: Promise<u32, String> = Promise::Empty;
        p.defer("a1".to_string());
        p.update(("a1".to_string(), Ok(1)));
        p.update(("a1".to_string(), Ok(9)));
        assert_eq!(p.resolved(), Some(&1));
    }

    #[test]
    fn contains_matches_any_settled_state_with_the_token() {
        let mut p: Promise<u32, String> = Promise::Empty;
        assert!(!p.contains(&"a1".to_string()));
        p.defer("a1".to_string());
        assert!(p.contains(&"a1".to_string()));
        p.update(("a1".to_string(), Err(Error::Http(404))));
        assert!(p.contains(&"a1".to_string()));
        assert!(!p.contains(&"a2".to_string()));
    }
}
