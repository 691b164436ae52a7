#![allow(dead_code)]

use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Local HTTP server answering every request with the same fixed response
pub struct RankingServer {
    pub base_url: String,
    handle: Option<thread::JoinHandle<Vec<String>>>,
}

impl RankingServer {
    /// Answer exactly one request
    pub fn start(status: &'static str, body: String) -> Self {
        Self::spawn(status, body, false)
    }

    /// Keep answering until no request arrives for two seconds
    pub fn start_repeating(status: &'static str, body: String) -> Self {
        Self::spawn(status, body, true)
    }

    fn spawn(status: &'static str, body: String, repeat: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
        let port = listener.local_addr().expect("No local addr").port();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("Failed to accept");
            let mut request_lines = vec![respond(stream, status, &body)];
            if !repeat {
                return request_lines;
            }

            listener
                .set_nonblocking(true)
                .expect("Failed to set non-blocking");
            let mut last_request = Instant::now();
            while last_request.elapsed() < Duration::from_secs(2) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        stream
                            .set_nonblocking(false)
                            .expect("Failed to set blocking");
                        request_lines.push(respond(stream, status, &body));
                        last_request = Instant::now();
                    }
                    Err(e) if e.kind() == ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(20));
                    }
                    Err(e) => panic!("Accept failed: {}", e),
                }
            }
            request_lines
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/playlet/listHotRanking", port),
            handle: Some(handle),
        }
    }

    /// Wait for the server and return every request line it saw
    pub fn request_lines(mut self) -> Vec<String> {
        self.handle
            .take()
            .expect("Server already joined")
            .join()
            .expect("Server thread panicked")
    }

    /// Wait for the single request and return its request line
    pub fn request_line(self) -> String {
        self.request_lines()
            .into_iter()
            .next()
            .expect("No request received")
    }
}

fn respond(stream: TcpStream, status: &str, body: &str) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("Failed to clone stream"));

    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .expect("Failed to read request line");
    // Drain headers
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).expect("Failed to read header");
        if n == 0 || line == "\r\n" {
            break;
        }
    }

    let mut stream = stream;
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream
        .write_all(response.as_bytes())
        .expect("Failed to write response");
    request_line
}

/// Temp directory holding a dataset file
pub struct Workspace {
    pub temp_dir: TempDir,
    pub dataset_path: PathBuf,
    pub output_path: PathBuf,
}

impl Workspace {
    pub fn with_dataset(csv: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let dataset_path = temp_dir.path().join("短剧.csv");
        std::fs::write(&dataset_path, csv).expect("Failed to write dataset");
        let output_path = temp_dir.path().join("out/matching_results.json");
        Self {
            temp_dir,
            dataset_path,
            output_path,
        }
    }

    pub fn read_report(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(&self.output_path).expect("Report not written");
        serde_json::from_str(&content).expect("Report is not JSON")
    }
}

pub const DATASET: &str = "100-灵异（30集）&张三&李四,https://pan.quark.cn/a\n\
32019-MyShow长剧集（71集）,https://pan.quark.cn/b\n\
MyShow,https://pan.quark.cn/c\n\
Elsewhere,https://pan.baidu.com/d\n";

pub const RANKING: &str = r#"{"content": [
    {"ranking": 1, "playletName": "灵异"},
    {"ranking": 2, "playletName": "MyShow"},
    {"ranking": 3, "playletName": "Elsewhere"}
]}"#;
