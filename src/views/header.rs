//! Server-rendered page header. One of two fixed markup branches is chosen
//! depending on whether a signed-in user is known.

/// Escape HTML special characters before interpolating user-supplied text.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render the catalog header. `user_name` present selects the signed-in
/// branch; `None` selects the signed-out branch.
pub fn render_header(user_name: Option<&str>) -> String {
    match user_name {
        Some(name) => format!(
            r#"<header>
    <div class="wrap header--flex">
        <h1 class="header--logo"><a href="/">Courses</a></h1>
        <nav>
            <ul class="header--signedin">
                <li>Welcome, {}!</li>
                <li><a href="/api/signout">Sign Out</a></li>
            </ul>
        </nav>
    </div>
</header>"#,
            html_escape(name)
        ),
        None => r#"<header>
    <div class="wrap header--flex">
        <h1 class="header--logo"><a href="/">Courses</a></h1>
        <nav>
            <ul class="header--signedout">
                <li><a href="/api/signup">Sign Up</a></li>
                <li><a href="/api/signin">Sign In</a></li>
            </ul>
        </nav>
    </div>
</header>"#
            .to_string(),
    }
}

/// Wrap the header in a minimal document shell.
pub fn render_index(user_name: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Courses</title>
</head>
<body>
{}
</body>
</html>"#,
        render_header(user_name)
    )
}
