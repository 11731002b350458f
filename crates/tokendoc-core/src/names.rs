//! Well-known layer and annotation names.
//!
//! These are the fixed internal names the documentation deployment uses for
//! its page, templates, and card slots. Deployments that name things
//! differently override the lookup path through `ResolverConfig` in
//! `tokendoc-build`; the slot and annotation names below are part of the
//! template contract and do not vary.

/// Page holding the documentation templates.
pub const PAGE_DESIGN_TOKENS: &str = "Design Tokens";
/// Holder layer for local templates inside the page.
pub const LAYER_LOCAL_COMPONENTS: &str = "Local Components";
/// Section-header template node.
pub const TEMPLATE_SECTION_HEADER: &str = "_Section Header";
/// Token-card template node.
pub const TEMPLATE_TOKEN_CARD: &str = "_Design Token Template";

/// Card slot: token name.
pub const SLOT_TOKEN_NAME: &str = "__tokenName";
/// Card slot: token value.
pub const SLOT_TOKEN_VALUE: &str = "__tokenValue";
/// Card slot: value preview swatch.
pub const SLOT_TOKEN_PREVIEW: &str = "__tokenPreview";
/// Card slot: alias marker.
pub const SLOT_TOKEN_ALIAS: &str = "__tokenAlias";
/// Card slot: token description.
pub const SLOT_TOKEN_DESCRIPTION: &str = "__tokenDescription";
/// Title slot inside the section-header template.
pub const SLOT_HEADER_TITLE: &str = "token.title.section";

/// Name of the assembled root container.
pub const ROOT_FRAME_NAME: &str = "Color Design Tokens";
/// Gap between sections in the root container.
pub const ROOT_ITEM_SPACING: f64 = 24.0;

/// Annotation namespace shared with the token store.
pub const ANNOTATION_NAMESPACE: &str = "tokens";
/// Store key holding the serialized token list.
pub const STORE_KEY_VALUES: &str = "values";

/// Annotation key written on the name slot.
pub const KEY_TOKEN_NAME: &str = "tokenName";
/// Annotation key written on the value slot.
pub const KEY_VALUE: &str = "value";
/// Annotation key written on the preview slot.
pub const KEY_FILL: &str = "fill";
/// Annotation key written on the alias slot.
pub const KEY_TOKEN_VALUE: &str = "tokenValue";
/// Annotation key written on the description slot.
pub const KEY_DESCRIPTION: &str = "description";
