use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use monkey_viewer::core::export::Exporter;
use monkey_viewer::core::loader::load_snapshot;
use monkey_viewer::core::refresh::AutoRefresh;
use monkey_viewer::core::source::{
    ArtifactSource, DirSource, HttpSource, DNA_FILE, HISTORY_FILE, STATS_FILE, SVG_FILE,
};
use monkey_viewer::core::svg::SvgPolicy;
use monkey_viewer::ui::view::MonkeyPanel;
use monkey_viewer::{Viewer, ViewerError};
use tempfile::TempDir;

use super::support::{history_json, write_monkey_data, DNA_JSON, STATS_JSON, SVG_TEXT};

/// Serve `files` below /monkey_data/ for `connections` requests, 404 otherwise
fn serve(files: HashMap<&'static str, String>, connections: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming().take(connections) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("/");
            let name = path.trim_start_matches("/monkey_data/");
            let (status, body) = match files.get(name) {
                Some(body) => ("200 OK", body.clone()),
                None => ("404 Not Found", "File not found".to_string()),
            };

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    format!("http://{}/monkey_data/", addr)
}

fn all_files() -> HashMap<&'static str, String> {
    let mut files = HashMap::new();
    files.insert(DNA_FILE, DNA_JSON.to_string());
    files.insert(STATS_FILE, STATS_JSON.to_string());
    files.insert(HISTORY_FILE, history_json(2));
    files.insert(SVG_FILE, SVG_TEXT.to_string());
    files
}

#[test]
fn test_http_source_loads_snapshot() {
    let base = serve(all_files(), 4);
    let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();

    let snapshot = load_snapshot(&source).unwrap();
    assert_eq!(snapshot.dna.generation(), 3);
    assert_eq!(snapshot.history.entries.len(), 2);
    assert!(snapshot.svg.contains("<svg"));
}

#[test]
fn test_http_404_is_resource_not_found() {
    let mut files = all_files();
    files.remove(STATS_FILE);
    let base = serve(files, 2);
    let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();

    match load_snapshot(&source) {
        Err(ViewerError::ResourceNotFound { resource, status }) => {
            assert_eq!(resource, STATS_FILE);
            assert_eq!(status, 404);
        }
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
}

#[test]
fn test_http_failure_in_viewer_shows_error_panel() {
    let mut files = all_files();
    files.remove(SVG_FILE);
    let base = serve(files, 4);
    let dir = TempDir::new().unwrap();

    let mut viewer = Viewer::new(
        HttpSource::new(&base, Duration::from_secs(5)).unwrap(),
        AutoRefresh::default(),
        Exporter::new(dir.path()),
        SvgPolicy::Trust,
    );

    assert!(!viewer.reload());
    assert_eq!(viewer.page().monkey, MonkeyPanel::load_error());
}

#[test]
fn test_unreachable_server_is_a_load_failure() {
    // Bind then drop so the port is very likely closed
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let source =
        HttpSource::new(&format!("http://127.0.0.1:{}/", port), Duration::from_secs(2)).unwrap();

    let started = Instant::now();
    let err = source.fetch_text(DNA_FILE).unwrap_err();
    assert!(err.is_load_failure());
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_dir_source_end_to_end() {
    let data = TempDir::new().unwrap();
    write_monkey_data(data.path(), 12);
    let exports = TempDir::new().unwrap();

    let mut viewer = Viewer::new(
        DirSource::new(data.path()),
        AutoRefresh::default(),
        Exporter::new(exports.path()),
        SvgPolicy::Trust,
    );

    assert!(viewer.reload());
    assert_eq!(viewer.page().history.as_ref().unwrap().count, 12);
    assert_eq!(viewer.page().history.as_ref().unwrap().items.len(), 10);

    let path = viewer.download().unwrap();
    assert!(path.starts_with(exports.path()));
}

#[test]
fn test_dir_source_missing_directory() {
    let data = TempDir::new().unwrap();
    let source = DirSource::new(data.path().join("monkey_data"));

    let err = load_snapshot(&source).unwrap_err();
    assert!(matches!(err, ViewerError::ResourceNotFound { status: 404, .. }));
}
