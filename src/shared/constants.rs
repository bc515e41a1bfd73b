// Request and endpoint constants shared by client and server

/// Endpoint the filter panel POSTs search criteria to.
pub const EXPLORE_ENDPOINT: &str = "/explore";

/// Wire value of the category select when no category filter applies.
pub const ANY_PUBLICATION_TYPE: &str = "any";

/// Prefix of per-dataset download URLs; the dataset id is appended.
pub const DOWNLOAD_URL_PREFIX: &str = "/movie/dataset/download";
