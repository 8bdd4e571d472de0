use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use crate::speech::SpeechSignal;

pub enum AppEvent {
    Input(String),
    Speech(SpeechSignal),
    Eof,
}

/// Single event channel for the loop thread: a reader thread feeds stdin
/// lines, and speech engines feed completion signals through a bridged
/// sender. All state mutation happens on the receiving side.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();

        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let event = match line {
                    Ok(line) => AppEvent::Input(line),
                    Err(_) => break,
                };
                if input_tx.send(event).is_err() {
                    return;
                }
            }
            let _ = input_tx.send(AppEvent::Eof);
        });

        Self { rx, tx }
    }

    /// Sender handed to speech engines. Signals are forwarded onto the main
    /// channel so the loop sees input and completions in one stream.
    pub fn speech_sender(&self) -> mpsc::Sender<SpeechSignal> {
        let (sig_tx, sig_rx) = mpsc::channel::<SpeechSignal>();
        let tx = self.tx.clone();
        thread::spawn(move || {
            for signal in sig_rx {
                if tx.send(AppEvent::Speech(signal)).is_err() {
                    return;
                }
            }
        });
        sig_tx
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
