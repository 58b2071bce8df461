//! Static file server for the chat widget
//!
//! Serves the trunk build from the dist directory. Any path that is not a file
//! (e.g. `/v/Server2024`) gets `index.html`, with `window.APP_VERSION` set from
//! the `/v/<slug>` segment.
//!
//! Environment:
//! - `CHAT_WEB_ADDR` - bind address (default `127.0.0.1:8080`)
//! - `CHAT_WEB_DIST` - directory to serve (default `dist`)

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

use lib_utils::envs::get_env_or;
use lib_utils::validation::validate_slug;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "dist";

fn main() {
    let addr = get_env_or("CHAT_WEB_ADDR", DEFAULT_ADDR);
    let dist = PathBuf::from(get_env_or("CHAT_WEB_DIST", DEFAULT_DIST));

    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Chat widget server running at http://{}", addr);
    println!("Serving from {}", dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("mp3") => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

/// Version slug of a `/v/<slug>` page path.
fn page_version(path: &str) -> Option<&str> {
    let slug = path.strip_prefix("/v/")?.trim_end_matches('/');
    validate_slug(slug).ok().map(|_| slug)
}

/// index.html with the page version injected before `</head>`.
fn index_page(dist: &Path, version: Option<&str>) -> Option<Vec<u8>> {
    let html = fs::read_to_string(dist.join("index.html")).ok()?;
    let Some(version) = version else {
        return Some(html.into_bytes());
    };

    let script = format!("<script>window.APP_VERSION = \"{}\";</script></head>", version);
    Some(html.replacen("</head>", &script, 1).into_bytes())
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split_once('?').map_or(full_path, |(p, _)| p);

    let mut file_path = dist.to_path_buf();
    file_path.push(path.trim_start_matches('/'));

    let (status, body, mime) = if path != "/" && !path.contains("..") && file_path.is_file() {
        match fs::read(&file_path) {
            Ok(contents) => ("200 OK", contents, content_type(&file_path)),
            Err(e) => {
                eprintln!("Failed to read {}: {}", file_path.display(), e);
                ("500 INTERNAL SERVER ERROR", Vec::new(), "text/plain")
            }
        }
    } else {
        // Client-side page: serve index.html
        match index_page(dist, page_version(path)) {
            Some(contents) => ("200 OK", contents, "text/html; charset=utf-8"),
            None => {
                eprintln!("index.html not found in {}", dist.display());
                (
                    "404 NOT FOUND",
                    b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>".to_vec(),
                    "text/html",
                )
            }
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        mime,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}
