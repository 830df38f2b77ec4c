/// The bounds every domain value must satisfy.
///
/// Values need equality and hashing so they can live in domain sets and
/// assignments, and a total order so that value enumeration and the
/// least-constraining-value tie-break are deterministic. This is a marker
/// trait: any type meeting the bounds implements `Value`.
pub trait Value: Clone + std::fmt::Debug + Eq + std::hash::Hash + Ord + 'static {}
impl<T> Value for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + Ord + 'static {}
