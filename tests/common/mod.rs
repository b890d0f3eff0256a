// tests/common/mod.rs
//
// Shared fixtures: canned pages, an in-memory fetcher and a tiny HTTP server.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use staff_scrape::core::Fetch;
use staff_scrape::error::FetchError;

pub fn listing(hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .map(|h| format!(r#"<li><a class="staff__link" href="{h}">profile</a></li>"#))
        .collect();
    format!("<html><body><ul class=\"staff\">{links}</ul></body></html>")
}

pub fn profile(name: Option<&str>, title: &str, teams: &[&str], photo: &str, bio: &str) -> String {
    let h1 = name.map(|n| format!("<h1>{n}</h1>")).unwrap_or_default();
    let h6: String = teams.iter().map(|t| format!("<h6>{t},</h6>")).collect();
    format!(
        r#"<html><body>
        <div class="staff-title">
          <div class="staff-title__content">{h1}<span>{title}</span>{h6}</div>
          <div class="staff-title__photo"><img src="{photo}"></div>
        </div>
        <div class="post-content"><p>{bio}</p></div>
        </body></html>"#
    )
}

/// URL → page text. Unknown URLs answer 404.
#[derive(Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
}

impl StaticPages {
    pub fn with(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }
}

impl Fetch for StaticPages {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

/// Serve `routes` (path → (status, body)) on an ephemeral port.
/// Returns the base URL, e.g. `http://127.0.0.1:54321`.
pub fn serve(routes: Vec<(&str, u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let routes: HashMap<String, (u16, String)> = routes
        .into_iter()
        .map(|(path, status, body)| (path.to_string(), (status, body)))
        .collect();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            handle(stream, &routes);
        }
    });
    base
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, (u16, String)>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

    let (status, body) = routes
        .get(&path)
        .cloned()
        .unwrap_or((404, String::from("not found")));
    let reason = if status == 200 { "OK" } else { "Error" };
    let resp = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(resp.as_bytes());
    let _ = stream.flush();
}
