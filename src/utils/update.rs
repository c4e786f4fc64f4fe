/// How an update request applies its payload.
///
/// Every resource exposes both PUT and PATCH on the same service method; the
/// mode decides whether omitted mandatory fields are an error or a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// PUT: every mandatory field must be supplied.
    Full,
    /// PATCH: only supplied fields change.
    Partial,
}
