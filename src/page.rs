//! HTML page for the monitor. One fixed document; the status block only
//! appears once there is something to report.

/// Everything the page needs to render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageView {
    pub live_status: String,
    /// `None` until a before/after claim comparison actually ran.
    pub mining: Option<bool>,
    pub address: String,
}

impl PageView {
    /// A page that reports `status` without an activity verdict.
    pub fn failure(status: impl Into<String>, address: &str) -> Self {
        Self {
            live_status: status.into(),
            mining: None,
            address: address.to_string(),
        }
    }

    fn has_status(&self) -> bool {
        !self.live_status.is_empty() || self.mining.is_some()
    }
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Netrum Mining Monitor</title>
  <style>
    body {
      font-family: sans-serif;
      padding: 2rem;
      max-width: 700px;
      margin: auto;
    }
    input[type="text"] {
      width: 100%;
      padding: 0.5rem;
      font-size: 1rem;
    }
    button {
      margin-top: 1rem;
      padding: 0.6rem 1.2rem;
      font-size: 1rem;
    }
    .status {
      margin-top: 2rem;
      font-family: monospace;
      font-size: 1.2rem;
      white-space: pre-wrap;
    }
  </style>
</head>
<body>
  <h1>📡 Netrum Node Mining Monitor</h1>
  <p style="color: orange; font-weight: bold;">
    ⏳ Please wait ~30 seconds after submitting. The data may take some time to load.
  </p>
"#;

pub fn render(view: &PageView) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(HEAD);
    html.push_str(&format!(
        r#"  <form method="POST">
    <label for="address">Enter your EVM node address:</label><br />
    <input type="text" id="address" name="address" required value="{}" />
    <button type="submit">Check Mining</button>
  </form>

  <div class="status">
"#,
        escape(&view.address)
    ));

    if view.has_status() {
        html.push_str("  📊 <b>Mining Status:</b><br/>\n");
        if !view.live_status.is_empty() {
            html.push_str(&format!("  {}<br/><br/>\n", escape(&view.live_status)));
        }
        let activity = if view.mining == Some(true) {
            "active"
        } else {
            "stopped"
        };
        html.push_str(&format!("  ⛏ <b>Mining Activity:</b> {activity}\n"));
    }

    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

/// Minimal escaping for text and double-quoted attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_has_form_but_no_status() {
        let html = render(&PageView::default());
        assert!(html.contains(r#"name="address" required value="""#));
        assert!(html.contains("Check Mining"));
        assert!(!html.contains("Mining Status"));
        assert!(!html.contains("Mining Activity"));
    }

    #[test]
    fn activity_follows_the_flag_value() {
        let mut view = PageView {
            live_status: "Avail to claim: 1.000000 NPT | Speed: 0.000000/s".into(),
            mining: Some(true),
            address: "0xabc".into(),
        };
        let html = render(&view);
        assert!(html.contains("Avail to claim: 1.000000 NPT | Speed: 0.000000/s<br/><br/>"));
        assert!(html.contains("<b>Mining Activity:</b> active"));

        view.mining = Some(false);
        assert!(render(&view).contains("<b>Mining Activity:</b> stopped"));
    }

    #[test]
    fn computed_flag_alone_shows_status_block() {
        let view = PageView {
            mining: Some(false),
            ..PageView::default()
        };
        let html = render(&view);
        assert!(html.contains("Mining Status"));
        assert!(!html.contains("<br/><br/>"));
        assert!(html.contains("<b>Mining Activity:</b> stopped"));
    }

    #[test]
    fn echoed_input_is_escaped() {
        let view = PageView::failure("❌ Invalid EVM address", r#""><script>x</script>"#);
        let html = render(&view);
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;x&lt;/script&gt;""#));
        assert!(!html.contains("<script>"));
        assert!(html.contains("❌ Invalid EVM address<br/><br/>"));
        assert!(html.contains("<b>Mining Activity:</b> stopped"));
    }
}
