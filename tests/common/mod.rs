//! Fixtures, card helpers and a throwaway HTTP server for tests that must not touch the live API.
#![allow(dead_code)]

use country_lookup::cards::Card;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

pub const PAKISTAN: &str = include_str!("../fixtures/pakistan.json");
pub const CHILE: &str = include_str!("../fixtures/chile_full.json");

/// Plain-text body of the card titled `title`.
pub fn card_text(cards: &[Card], title: &str) -> Option<String> {
    cards.iter().find(|c| c.title == title).map(Card::display_text)
}

pub struct TestServer {
    /// Base URL to hand to `Client::with_base_url`, e.g. `http://127.0.0.1:4711/v3.1`.
    pub base_url: String,
    /// Request paths in arrival order.
    pub paths: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Wait until the server has answered all of its requests.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().unwrap();
        let paths = self.paths.lock().unwrap();
        paths.clone()
    }
}

/// Answer the next `requests` connections with `status` and `body`.
pub fn serve(status: u16, body: &'static str, requests: usize) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let paths = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&paths);

    let handle = thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let head = String::from_utf8_lossy(&head);
            let path = head
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or("")
                .to_string();
            seen.lock().unwrap().push(path);

            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
    });

    TestServer {
        base_url: format!("http://{}/v3.1", addr),
        paths,
        handle,
    }
}
