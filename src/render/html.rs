use crate::render::{escape_html, PageContext};
use crate::stats::group_thousands;
use crate::Result;

use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// Render the installer page for one bookmarklet.
///
/// Important: we avoid `format!()` because the CSS is full of `{}`. Values go
/// in through `__NAME__`-style placeholders, substituted in a single pass so
/// nothing interpolated (the script is free to contain `__FOO__`) is ever
/// rescanned.
pub fn render_bookmarklet_page(ctx: &PageContext<'_>) -> Result<String> {
    const PLACEHOLDER_RE: &str = r"__([A-Z]+(?:_[A-Z]+)*)__";
    let re = Regex::new(PLACEHOLDER_RE)?;

    let mut values: BTreeMap<&str, String> = BTreeMap::new();
    values.insert("NAME", escape_html(ctx.name));
    values.insert("SCRIPT_LABEL", escape_html(ctx.script_label));
    values.insert("ORIGINAL_BYTES", group_thousands(ctx.stats.original_bytes));
    values.insert("ORIGINAL_KB", ctx.stats.original_kb().to_string());
    values.insert(
        "BOOKMARKLET_BYTES",
        group_thousands(ctx.stats.bookmarklet_bytes),
    );
    values.insert("BOOKMARKLET_KB", ctx.stats.bookmarklet_kb().to_string());
    // Strict encoding leaves only [A-Za-z0-9_.~%-], all attribute-safe.
    values.insert("BOOKMARKLET", ctx.bookmarklet.to_string());

    let html = re.replace_all(TEMPLATE, |caps: &Captures<'_>| match values.get(&caps[1]) {
        Some(v) => v.clone(),
        None => caps[0].to_string(),
    });

    Ok(html.into_owned())
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>__NAME__ - Complete Local Bookmarklet</title>
    <style>
        body {
            font-family: -apple-system, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
        }
        .container {
            background: white;
            border-radius: 20px;
            padding: 40px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
        }
        h1 {
            color: #333;
            margin-bottom: 10px;
        }
        .subtitle {
            color: #666;
            font-size: 1.1rem;
        }
        .install {
            text-align: center;
        }
        .drag-hint {
            color: #666;
        }
        .bookmarklet {
            display: inline-block;
            padding: 20px 40px;
            background: linear-gradient(135deg, #0066cc, #0099ff);
            color: white;
            text-decoration: none;
            border-radius: 50px;
            font-weight: 600;
            font-size: 1.2rem;
            margin: 30px 0;
            transition: transform 0.2s, box-shadow 0.2s;
            cursor: move;
        }
        .bookmarklet:hover {
            transform: translateY(-2px);
            box-shadow: 0 10px 30px rgba(0,102,204,0.4);
        }
        .info {
            background: #f0f8ff;
            padding: 20px;
            border-radius: 12px;
            margin: 20px 0;
            border-left: 4px solid #0066cc;
        }
        .features {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .feature {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 8px;
            text-align: center;
        }
        .feature-icon {
            font-size: 2rem;
            margin-bottom: 10px;
        }
        code {
            background: #f0f0f0;
            padding: 2px 6px;
            border-radius: 4px;
            font-family: monospace;
        }
        .success {
            background: #d4edda;
            border-left: 4px solid #28a745;
            padding: 15px;
            border-radius: 8px;
            margin: 20px 0;
        }
        .stats {
            background: #e8f4fd;
            border-left: 4px solid #0066cc;
            padding: 15px;
            border-radius: 8px;
            margin: 20px 0;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>⚡ __NAME__ - Complete Edition</h1>
        <p class="subtitle">The full __SCRIPT_LABEL__ embedded as a bookmarklet. No server required!</p>

        <div class="success">
            <strong>✅ Successfully Generated!</strong><br>
            The bookmarklet below contains the complete __NAME__ code.
        </div>

        <div class="stats">
            <strong>📊 Bookmarklet Stats:</strong><br>
            • Original code size: __ORIGINAL_BYTES__ bytes (__ORIGINAL_KB__ KB)<br>
            • Bookmarklet size: __BOOKMARKLET_BYTES__ bytes (__BOOKMARKLET_KB__ KB)<br>
            • Features: Animated orb, draggable UI, radial menu, 4 transformation modes
        </div>

        <div class="install">
            <a href="__BOOKMARKLET__" class="bookmarklet">
                ⚡ __NAME__
            </a>
            <p class="drag-hint">↑ Drag this button to your bookmarks bar</p>
        </div>

        <div class="info">
            <h3>📚 Installation Instructions</h3>
            <ol>
                <li><strong>Show your bookmarks bar:</strong> Press <code>Cmd+Shift+B</code> (Mac) or <code>Ctrl+Shift+B</code> (PC)</li>
                <li><strong>Drag the blue button</strong> above to your bookmarks bar</li>
                <li><strong>Click the bookmark</strong> on any website to activate __NAME__</li>
                <li><strong>Click the glowing orb</strong> to see the radial menu</li>
            </ol>
        </div>

        <h3>✨ What You Get</h3>
        <div class="features">
            <div class="feature">
                <div class="feature-icon">🎨</div>
                <strong>Animated Logo</strong><br>
                SVG with glow effects
            </div>
            <div class="feature">
                <div class="feature-icon">🎯</div>
                <strong>Draggable Orb</strong><br>
                Drag to any corner
            </div>
            <div class="feature">
                <div class="feature-icon">🌀</div>
                <strong>Radial Menu</strong><br>
                Smart positioning based on corner
            </div>
            <div class="feature">
                <div class="feature-icon">📖</div>
                <strong>Reader Mode</strong><br>
                Extract and beautify articles
            </div>
            <div class="feature">
                <div class="feature-icon">🌙</div>
                <strong>Dark Mode</strong><br>
                Intelligent color inversion
            </div>
            <div class="feature">
                <div class="feature-icon">⚡</div>
                <strong>Speed Mode</strong><br>
                Remove ads and annoyances
            </div>
            <div class="feature">
                <div class="feature-icon">🧘</div>
                <strong>Zen Mode</strong><br>
                Minimal, focused view
            </div>
            <div class="feature">
                <div class="feature-icon">🔒</div>
                <strong>100% Private</strong><br>
                No server, no tracking
            </div>
        </div>

        <div class="info">
            <strong>💡 Pro Tips:</strong>
            <ul>
                <li>The orb automatically snaps to the nearest corner when dragged</li>
                <li>The radial menu adjusts based on which corner the orb is in</li>
                <li>Click the orb again to close the menu</li>
                <li>The bookmarklet works on any website</li>
            </ul>
        </div>
    </div>
</body>
</html>
"#;
