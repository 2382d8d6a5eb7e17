pub(crate) mod bookmarks;
pub(crate) mod migrate;
pub(crate) mod serve;
