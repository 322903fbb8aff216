//! Credential display for rendered snippets.

use snippet_core::{Credential, DEFAULT_MASKED_SECRET, RenderContext};

/// Returns the text to show in place of `credential`.
///
/// Production deployments get the fixed placeholder
/// `<secret-key-from-environment-settings>`; any other deployment shows the
/// real key so local snippets run as pasted.
///
/// # Examples
///
/// ```
/// use snippet_codegen::secret::present;
/// use snippet_core::{Credential, RenderContext};
///
/// let key = Credential::new("sk-live-123");
/// assert_eq!(present(&RenderContext::development(), &key), "sk-live-123");
/// assert_eq!(
///     present(&RenderContext::production(), &key),
///     "<secret-key-from-environment-settings>"
/// );
/// ```
#[must_use]
pub fn present<'a>(context: &RenderContext, credential: &'a Credential) -> &'a str {
    present_with_mask(context, credential, DEFAULT_MASKED_SECRET)
}

/// Like [`present`], with a caller-chosen placeholder.
#[must_use]
pub fn present_with_mask<'a>(
    context: &RenderContext,
    credential: &'a Credential,
    masked: &'a str,
) -> &'a str {
    if context.is_production() {
        masked
    } else {
        credential.expose()
    }
}
