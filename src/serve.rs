//! Development server.
//!
//! Serves the build output over HTTP with `index.html` resolution for
//! directories, and renders site routes on the fly so a `?viewport=W`
//! query can preview any width: the parameter goes through the shared
//! [`Viewport`] writer and the page is rendered at the resulting
//! classification. Static assets are read from disk per request.
//!
//! The server blocks until Ctrl+C is received.

use crate::assemble::Site;
use crate::config::SiteConfig;
use crate::log;
use crate::render::{RenderContext, render_route};
use crate::responsive::Viewport;
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path, sync::Arc};
use tiny_http::{Header, Request, Response, Server};

/// Start the development server.
pub fn serve_site(config: &SiteConfig, site: Site) -> Result<()> {
    let addr = format!("{}:{}", config.serve.interface, config.serve.port);
    let server =
        Server::http(&addr).map_err(|err| anyhow!("Failed to bind {addr}: {err}"))?;
    let server = Arc::new(server);

    let viewport = Viewport::new(config.build.viewport);
    viewport.subscribe(|class| log!("serve"; "previewing {} layout", class.name()));

    // Ctrl+C unblocks the request loop for a clean shutdown
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "listening on http://{addr}");

    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request, config, &site, &viewport) {
            log!("error"; "{err:#}");
        }
    }

    log!("serve"; "stopped");
    Ok(())
}

fn handle_request(
    request: Request,
    config: &SiteConfig,
    site: &Site,
    viewport: &Viewport,
) -> Result<()> {
    let url = request.url().to_owned();
    let (path, query) = split_url(&url);

    if path.contains("..") {
        return respond_status(request, 400, "Bad request");
    }

    if let Some(width) = query.and_then(viewport_param) {
        viewport.set_width(width);
    }

    // Site routes render fresh at the current classification
    let route = normalize_route(path);
    let ctx = RenderContext::new(config, viewport.screen_class());
    if let Some(result) = render_route(site, &route, &ctx) {
        let response = Response::from_data(result?)
            .with_header(content_type_header("text/html; charset=utf-8")?);
        request.respond(response)?;
        return Ok(());
    }

    serve_file(request, &config.build.output, path)
}

/// Serve a static file from the output directory.
fn serve_file(request: Request, output: &Path, path: &str) -> Result<()> {
    let mut file_path = output.join(path.trim_start_matches('/'));
    if file_path.is_dir() {
        file_path = file_path.join("index.html");
    }

    if !file_path.is_file() {
        return respond_status(request, 404, "Not found");
    }

    let content = fs::read(&file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let response =
        Response::from_data(content).with_header(content_type_header(content_type(&file_path))?);
    request.respond(response)?;
    Ok(())
}

fn respond_status(request: Request, status: u16, message: &str) -> Result<()> {
    let response = Response::from_string(message).with_status_code(status);
    request.respond(response)?;
    Ok(())
}

fn content_type_header(value: &str) -> Result<Header> {
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes())
        .map_err(|()| anyhow!("Invalid content type header"))
}

/// Split a request URL into path and optional query string.
fn split_url(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}

/// Extract a `viewport=W` parameter from a query string.
fn viewport_param(query: &str) -> Option<u32> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != "viewport" {
            return None;
        }
        urlencoding::decode(value).ok()?.parse().ok()
    })
}

/// Normalize a request path to a site route: strip the trailing slash,
/// keep the root as `/`.
fn normalize_route(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Content type by file extension.
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
