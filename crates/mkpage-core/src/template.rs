//! Fixed page templates: the HTML fragment and the JSON metadata document.
//!
//! The title is substituted verbatim in both outputs. There is deliberately
//! no HTML escaping and no templating engine; the fragment shape is fixed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Metadata record stored next to each page fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
}

/// Render the boilerplate HTML fragment for a page. The title appears twice:
/// in the visible heading and in the inline script's log message.
pub fn render_html(title: &str) -> String {
    format!(
        r#"<div class="text-center">
<h1>{title}</h1>
<a href="/home">home</a>
<a href="/p1">p1</a>
<a href="/p2">p2</a>
<a href="/p3">p3</a>
<!-- PAGE_SCRIPT:START -->
    <script>
        console.log("页面 {title} 已加载");
    </script>
<!-- PAGE_SCRIPT:END -->
</div>"#
    )
}

/// Render the JSON metadata document: 4-space indentation, non-ASCII kept
/// literal (serde_json writes UTF-8 without escaping by default).
pub fn render_meta(title: &str) -> Result<String> {
    let meta = PageMeta {
        title: title.to_owned(),
    };
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    meta.serialize(&mut ser).context("serialize page metadata")?;
    String::from_utf8(buf).context("page metadata is not valid UTF-8")
}
