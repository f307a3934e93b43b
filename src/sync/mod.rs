pub(crate) mod actives;
