use fxhash::FxHashMap;

use super::sym::Sym;

/// Two-way table between vertex labels and their [`Sym`] ids.
///
/// Labels keep the order in which they were first interned, which
/// is the order the graph reports its vertices in.
#[derive(Clone, Default)]
pub(crate) struct Interner {
    map_strs: FxHashMap<Box<str>, Sym>,
    strs: Vec<Box<str>>,
}

impl Interner {
    pub(crate) fn new() -> Self {
        Interner::default()
    }

    #[inline(always)]
    pub(crate) fn get(&self, val: &str) -> Option<Sym> {
        self.map_strs.get(val).copied()
    }

    /// Returns the id of `val` and whether it had to be created.
    pub(crate) fn get_or_intern(&mut self, val: impl AsRef<str>) -> (Sym, bool) {
        match self.map_strs.get(val.as_ref()) {
            Some(sym) => (*sym, false),
            None => {
                let sym = Sym::from_usize(self.strs.len());
                self.map_strs.insert(val.as_ref().into(), sym);
                self.strs.push(val.as_ref().into());
                (sym, true)
            }
        }
    }

    /// Ids only ever come from this interner, so a miss is a bug in
    /// the graph and not in the caller's input.
    #[inline(always)]
    pub(crate) fn resolve(&self, sym: Sym) -> &str {
        &self.strs[sym.into_usize()]
    }

    pub(crate) fn resolve_many(&self, syms: impl IntoIterator<Item = Sym>) -> Vec<&str> {
        syms.into_iter().map(|sym| self.resolve(sym)).collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Sym, &str)> {
        self.strs
            .iter()
            .enumerate()
            .map(|(i, s)| (Sym::from_usize(i), s.as_ref()))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.strs.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map_strs.clear();
        self.strs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_in_insertion_order() {
        let mut interner = Interner::new();
        let (int1, new1) = interner.get_or_intern("Hello");
        let (int2, new2) = interner.get_or_intern("World");
        assert!(new1 && new2);
        assert_eq!(int1, 0);
        assert_eq!(int2, 1);
        assert_eq!(interner.resolve_many([int2, int1]), ["World", "Hello"]);
    }

    #[test]
    fn repeated_label_reuses_id() {
        let mut interner = Interner::new();
        let (first, _) = interner.get_or_intern("A");
        let (again, created) = interner.get_or_intern("A");
        assert_eq!(first, again);
        assert!(!created);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut interner = Interner::new();
        interner.get_or_intern("A");
        interner.get_or_intern("B");
        interner.clear();
        assert_eq!(interner.len(), 0);
        assert_eq!(interner.get("A"), None);
        let (sym, _) = interner.get_or_intern("B");
        assert_eq!(sym, 0);
    }
}
