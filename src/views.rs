//! HTML for the counter page.

use crate::service::ClapCount;

const STYLE: &str = "body{font-family:system-ui,sans-serif;display:grid;min-height:100vh;place-items:center;margin:0}\
main{display:flex;flex-direction:column;align-items:center;gap:2rem}\
.note{max-width:40rem;border:1px solid #ddd;border-radius:.5rem;background:#f9fafb;padding:1rem;color:#4b5563}\
button{height:3rem;border-radius:9999px;border:1px solid rgba(0,0,0,.08);padding:0 1.25rem;background:none;cursor:pointer}\
footer{display:flex;gap:1.5rem;padding:2rem}";

/// Counter page. The count line is left out when the count is unavailable.
pub fn render_home(count: ClapCount) -> String {
    let count_line = match count {
        ClapCount::Known(n) => format!("<span>{} claps so far!</span>", n),
        ClapCount::Unavailable => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>prezel starter</title><style>{style}</style></head>
<body>
<main>
<img alt="Prezel logo" width="200" src="https://prezel.app/big-logo">
<div class="note">Every deployment in prezel comes with an Sqlite DB and database branching setup out of the box. All you have to do to use it is pointing to <code>PREZEL_DB_URL</code></div>
<p>Want to see Prezel DB in action? Give us a clap below!</p>
<div class="claps">
<form method="post" action="/"><button type="submit"><img width="20" height="20" alt="clap image" src="https://www.svgrepo.com/show/9764/clap.svg"></button></form>
{count_line}
</div>
</main>
<footer>
<a href="https://docs.prezel.app" target="_blank" rel="noopener noreferrer">Learn</a>
<a href="https://github.com/prezel-app/prezel/tree/main/examples" target="_blank" rel="noopener noreferrer">Examples</a>
<a href="https://prezel.app" target="_blank" rel="noopener noreferrer">Go to prezel.app →</a>
</footer>
</body>
</html>
"#,
        style = STYLE,
        count_line = count_line,
    )
}
