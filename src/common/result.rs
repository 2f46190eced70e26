use crate::common::error::ProviderError;

/// gitprovider全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use gitprovider::common::result::ProviderResult;
/// use gitprovider::common::error::ProviderError;
///
/// fn scan_root(exists: bool) -> ProviderResult<()> {
///     if exists {
///         Ok(())
///     } else {
///         Err(ProviderError::filesystem_error("Scan root is not a directory", None))
///     }
/// }
///
/// assert!(scan_root(true).is_ok());
/// assert!(scan_root(false).is_err());
/// ```
pub type ProviderResult<T> = Result<T, ProviderError>;
