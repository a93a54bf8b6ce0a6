//! HTML rendering.
//!
//! Every page shares one layout: navigation that depends on whether a user is
//! logged in, an optional flash line for validation messages, then the content.
//! All user-supplied text goes through [`escape`].

use std::fmt::Write;

use actix_web::http::StatusCode;

use scribe_core::domain::{Post, PostId, User};
use scribe_shared::{CredentialsForm, PostForm};

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn layout(
    title: &str,
    user: Option<&User>,
    header: &str,
    flash: Option<&str>,
    content: &str,
) -> String {
    let nav = match user {
        Some(user) => format!(
            "<li><span>{}</span></li><li><a href=\"/auth/logout\">Log Out</a></li>",
            escape(&user.username)
        ),
        None => "<li><a href=\"/auth/register\">Register</a></li>\
                 <li><a href=\"/auth/login\">Log In</a></li>"
            .to_string(),
    };

    let flash = flash
        .map(|msg| format!("<div class=\"flash\">{}</div>\n", escape(msg)))
        .unwrap_or_default();

    format!(
        "<!doctype html>\n\
         <title>{title} - Scribe</title>\n\
         <nav><h1><a href=\"/\">Scribe</a></h1><ul>{nav}</ul></nav>\n\
         <section class=\"content\">\n\
         <header>{header}</header>\n\
         {flash}{content}\n\
         </section>\n",
        title = escape(title),
    )
}

/// The public post index.
pub fn index_page(user: Option<&User>, posts: &[Post]) -> String {
    let header = if user.is_some() {
        "<h1>Posts</h1><a class=\"action\" href=\"/create\">New</a>"
    } else {
        "<h1>Posts</h1>"
    };

    let mut content = String::new();
    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            content.push_str("<hr>\n");
        }
        let edit = match user {
            Some(user) if post.is_authored_by(user.id) => {
                format!("<a class=\"action\" href='/{}/update'>Edit</a>", post.id)
            }
            _ => String::new(),
        };
        // Writing into a String cannot fail.
        let _ = write!(
            content,
            "<article class=\"post\">\n\
             <header><div><h1>{title}</h1>\
             <div class=\"about\">by {author} on {date}</div></div>{edit}</header>\n\
             <p class=\"body\">{body}</p>\n\
             </article>\n",
            title = escape(&post.title),
            author = escape(&post.author_username),
            date = post.created.format("%Y-%m-%d"),
            body = escape(&post.body),
        );
    }

    layout("Posts", user, header, None, &content)
}

fn credentials_form(form: &CredentialsForm, submit: &str) -> String {
    format!(
        "<form method=\"post\">\n\
         <label for=\"username\">Username</label>\
         <input name=\"username\" id=\"username\" value=\"{username}\" required>\n\
         <label for=\"password\">Password</label>\
         <input type=\"password\" name=\"password\" id=\"password\" required>\n\
         <input type=\"submit\" value=\"{submit}\">\n\
         </form>",
        username = escape(&form.username),
    )
}

pub fn register_page(user: Option<&User>, form: &CredentialsForm, error: Option<&str>) -> String {
    layout(
        "Register",
        user,
        "<h1>Register</h1>",
        error,
        &credentials_form(form, "Register"),
    )
}

pub fn login_page(user: Option<&User>, form: &CredentialsForm, error: Option<&str>) -> String {
    layout(
        "Log In",
        user,
        "<h1>Log In</h1>",
        error,
        &credentials_form(form, "Log In"),
    )
}

fn post_form(form: &PostForm) -> String {
    format!(
        "<form method=\"post\">\n\
         <label for=\"title\">Title</label>\
         <input name=\"title\" id=\"title\" value=\"{title}\" required>\n\
         <label for=\"body\">Body</label>\
         <textarea name=\"body\" id=\"body\">{body}</textarea>\n\
         <input type=\"submit\" value=\"Save\">\n\
         </form>",
        title = escape(&form.title),
        body = escape(&form.body),
    )
}

pub fn create_page(user: &User, form: &PostForm, error: Option<&str>) -> String {
    layout("New Post", Some(user), "<h1>New Post</h1>", error, &post_form(form))
}

pub fn update_page(user: &User, id: PostId, form: &PostForm, error: Option<&str>) -> String {
    let header = format!("<h1>Edit \"{}\"</h1>", escape(&form.title));
    let content = format!(
        "{}\n<hr>\n\
         <form action='/{id}/delete' method=\"post\">\
         <input class=\"danger\" type=\"submit\" value=\"Delete\" \
         onclick=\"return confirm('Are you sure?');\">\
         </form>",
        post_form(form),
    );

    layout("Edit Post", Some(user), &header, error, &content)
}

/// Page for a failed request. `detail` is shown when it is safe to expose.
pub fn error_page(status: StatusCode, detail: Option<&str>) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let detail = detail
        .map(|d| format!("<p>{}</p>", escape(d)))
        .unwrap_or_default();

    format!(
        "<!doctype html>\n<title>{code} {reason}</title>\n<h1>{reason}</h1>\n{detail}\n",
        code = status.as_u16(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(id: i32, name: &str) -> User {
        User {
            id,
            username: name.to_string(),
            password_hash: String::new(),
        }
    }

    fn post(author_id: i32) -> Post {
        Post {
            id: 1,
            title: "test title".to_string(),
            body: "test\nbody".to_string(),
            created: Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(),
            author_id,
            author_username: "test".to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("test\nbody"), "test\nbody");
    }

    #[test]
    fn test_index_for_visitor() {
        let html = index_page(None, &[post(1)]);

        assert!(html.contains("Log In"));
        assert!(html.contains("Register"));
        assert!(html.contains("by test on 2018-01-01"));
        assert!(!html.contains("href='/1/update'"));
    }

    #[test]
    fn test_index_shows_edit_link_to_author_only() {
        let author = user(1, "test");
        let other = user(2, "other");

        let html = index_page(Some(&author), &[post(1)]);
        assert!(html.contains("Log Out"));
        assert!(html.contains("href='/1/update'"));

        let html = index_page(Some(&other), &[post(1)]);
        assert!(!html.contains("href='/1/update'"));
    }

    #[test]
    fn test_flash_is_escaped() {
        let html = login_page(None, &CredentialsForm::default(), Some("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
