#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

type ReceivedLines = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Replies `OK\n` to every line, closes on `QUIT`.
    ReplyOk,
    /// Closes every connection right after accepting it.
    CloseImmediately,
    /// Reads lines but never replies.
    Silent,
}

/// Line-based chat server stand-in, served on std threads so it can be used
/// from both async tests and tests that spawn the binaries.
pub struct MockChatServer {
    address: SocketAddr,
    received: ReceivedLines,
}

impl MockChatServer {
    pub fn start(behavior: MockBehavior) -> Self {
        Self::start_with_welcome(behavior, None)
    }

    pub fn start_with_welcome(behavior: MockBehavior, welcome: Option<&'static str>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let received = ReceivedLines::default();
        let lines = received.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let lines = lines.clone();
                thread::spawn(move || serve(stream, behavior, welcome, lines));
            }
        });
        Self { address, received }
    }

    /// Every line received so far, across all connections, in arrival order.
    pub fn received_lines(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Waits until `count` lines have arrived; the worker may return before
    /// the server thread has read its final `QUIT`.
    pub fn wait_for_lines(&self, count: usize, timeout: Duration) -> Vec<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let lines = self.received_lines();
            if lines.len() >= count || Instant::now() >= deadline {
                return lines;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    pub fn address(&self) -> String {
        self.address.to_string()
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }
}

fn serve(
    stream: TcpStream,
    behavior: MockBehavior,
    welcome: Option<&'static str>,
    received: ReceivedLines,
) {
    if behavior == MockBehavior::CloseImmediately {
        return;
    }

    let Ok(mut writer) = stream.try_clone() else {
        return;
    };
    if let Some(welcome) = welcome {
        if writer.write_all(welcome.as_bytes()).is_err() {
            return;
        }
    }

    if behavior == MockBehavior::Silent {
        let mut sink = Vec::new();
        let _ = (&stream).take(64 * 1024).read_to_end(&mut sink);
        return;
    }

    for line in BufReader::new(stream).lines() {
        let Ok(line) = line else { break };
        let line = line.trim().to_owned();
        received.lock().unwrap().push(line.clone());
        if line == "QUIT" {
            break;
        }
        if writer.write_all(b"OK\n").is_err() {
            break;
        }
    }
}

/// Address of a port nothing listens on.
pub fn closed_port_address() -> (String, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    // Give the OS a moment to release the socket.
    thread::sleep(Duration::from_millis(10));
    (address.to_string(), address.port())
}
