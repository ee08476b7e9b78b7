/// Dense id of an interned vertex label. Ids are handed out in
/// insertion order starting at zero, so they double as indices into
/// the adjacency table.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Sym(u32);

impl std::fmt::Debug for Sym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<u32> for Sym {
    fn eq(&self, other: &u32) -> bool {
        self.0.eq(other)
    }
}

impl Sym {
    #[inline(always)]
    pub const fn into_usize(self) -> usize {
        self.0 as usize
    }
    #[inline(always)]
    pub fn from_usize(v: usize) -> Self {
        Sym(v as u32)
    }
}
