use crate::{
    board::MountedPage,
    error::Error,
    output::{render_html, AppProps},
};
use http::{Method, Request, Response, StatusCode, Uri, Version};
use httparse::Status;
use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    str::FromStr,
    time::{Duration, Instant},
};

/// How long a connection may sit without sending before it's dropped.
const READ_TIMEOUT: Duration = Duration::from_secs(5);
/// Requests whose head is longer than this are dropped.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// Preview server. Requests are handled one at a time on the calling thread,
/// each one navigating the mounted page before rendering it.
pub fn serve(start: Instant, addr: &str, page: &MountedPage) -> Result<(), Error> {
    let listener = TcpListener::bind(addr).map_err(|source| Error::Bind {
        addr: addr.to_owned(),
        source,
    })?;

    log::info!(
        "({:.1}s) Serving on http://{addr}",
        start.elapsed().as_secs_f32()
    );

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_connection(page, stream, READ_TIMEOUT),
            Err(e) => log::debug!("accept failed: {e}"),
        }
    }
    Ok(())
}

/// Answers one request. Connections are served one after another, so a
/// client that stalls only holds the server for `timeout`.
fn handle_connection(page: &MountedPage, mut stream: TcpStream, timeout: Duration) {
    if let Err(e) = stream.set_read_timeout(Some(timeout)) {
        log::debug!("couldn't set read timeout: {e}");
        return;
    }

    let request = if let Some(request) = read_request(&mut stream) {
        request
    } else {
        return;
    };

    let response = handle_request(page, &request);
    log::info!("[{}] {}", response.status(), request.uri());

    if let Err(e) = write_response(&mut stream, &response) {
        log::debug!("couldn't write response: {e}");
    }
}

pub fn handle_request(page: &MountedPage, request: &Request<Vec<u8>>) -> Response<Vec<u8>> {
    if *request.method() != Method::GET {
        return text_response(request, StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
    }

    let path = request.uri().path();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if last_segment.contains('.') {
        return text_response(request, StatusCode::NOT_FOUND, "not found");
    }

    if let Some(board) = page.board() {
        let target = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or(path);
        board.navigate(target);
    }

    let body = render_html(AppProps {
        document: page.document(),
        root: page.root(),
        lang: page.lang().clone(),
    });

    Response::builder()
        .version(request.version())
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(body.into_bytes())
        .unwrap_or_default()
}

fn text_response(
    request: &Request<Vec<u8>>,
    status: StatusCode,
    body: &str,
) -> Response<Vec<u8>> {
    Response::builder()
        .version(request.version())
        .status(status)
        .header(http::header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(body.as_bytes().to_vec())
        .unwrap_or_default()
}

fn read_request(stream: &mut impl Read) -> Option<Request<Vec<u8>>> {
    let mut buf = Vec::new();

    loop {
        let mut tmp = [0u8; 1024];
        match stream.read(&mut tmp) {
            Ok(0) => return None,
            Err(e) => {
                log::debug!("dropping connection: {e}");
                return None;
            }
            Ok(n) => {
                buf.extend_from_slice(&tmp[0..n]);
            }
        };
        if buf.len() > MAX_REQUEST_BYTES {
            log::debug!("dropping request over {MAX_REQUEST_BYTES} bytes");
            return None;
        }

        let mut headers = [httparse::EMPTY_HEADER; 128];
        let mut parse_req = httparse::Request::new(&mut headers);
        if let Status::Complete(_) = parse_req.parse(&buf).ok()? {
            let method = parse_req.method.and_then(|m| Method::from_str(m).ok())?;
            let uri = parse_req.path.and_then(|p| Uri::from_str(p).ok())?;
            let mut builder = Request::builder().method(method).uri(uri).version(
                if parse_req.version == Some(1) {
                    Version::HTTP_11
                } else {
                    Version::HTTP_10
                },
            );
            for header in parse_req.headers.iter() {
                builder = builder.header(header.name, header.value);
            }
            return builder.body(Vec::new()).ok();
        }
    }
}

fn write_response(stream: &mut TcpStream, response: &Response<Vec<u8>>) -> std::io::Result<()> {
    let status_line = format!(
        "{:?} {} {}\r\n",
        response.version(),
        response.status().as_u16(),
        response.status().canonical_reason().unwrap_or_default()
    );

    let mut headers = String::new();
    for (name, value) in response.headers() {
        headers.push_str(&format!("{}: {}\r\n", name, value.to_str().unwrap_or("")));
    }
    let body: &[u8] = response.body().as_ref();
    headers.push_str(&format!("Content-Length: {}\r\n\r\n", body.len()));

    stream.write_all(status_line.as_bytes())?;
    stream.write_all(headers.as_bytes())?;
    stream.write_all(body)?;
    stream.flush()
}
