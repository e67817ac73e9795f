// Sample stream - Bounded producer/consumer queue between the APU and audio
//
// The APU pushes one sample per audio tick; the audio backend drains at the
// playback rate. A full queue blocks the producer, which is what paces the
// emulation to real time.

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TryIter};
use std::time::Duration;

/// Create a bounded sample stream
///
/// # Arguments
///
/// * `capacity` - Number of samples the queue holds before `push` blocks (at least 1)
///
/// # Returns
///
/// The producer half (owned by the APU) and a consumer handle
pub fn sample_stream(capacity: usize) -> (SampleSink, SampleStream) {
    let (tx, rx) = channel::bounded(capacity.max(1));
    (SampleSink { tx }, SampleStream { rx })
}

/// Producer half of the sample stream
#[derive(Debug)]
pub struct SampleSink {
    tx: Sender<i16>,
}

impl SampleSink {
    /// Push a sample, blocking while the queue is full
    ///
    /// Returns false if every consumer handle has been dropped.
    pub fn push(&self, sample: i16) -> bool {
        self.tx.send(sample).is_ok()
    }

    /// Get the number of queued samples
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    /// Check whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }

    /// Check whether the next push would block
    pub fn is_full(&self) -> bool {
        self.tx.is_full()
    }

    /// Get the queue capacity
    pub fn capacity(&self) -> usize {
        self.tx.capacity().unwrap_or(0)
    }
}

/// Read-only consumer handle yielding signed 16-bit amplitudes
#[derive(Debug, Clone)]
pub struct SampleStream {
    rx: Receiver<i16>,
}

impl SampleStream {
    /// Wait for the next sample
    ///
    /// Returns None once the producer is gone and the queue is drained.
    pub fn recv(&self) -> Option<i16> {
        self.rx.recv().ok()
    }

    /// Take the next sample if one is queued
    pub fn try_recv(&self) -> Option<i16> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next sample
    pub fn recv_timeout(&self, timeout: Duration) -> Option<i16> {
        match self.rx.recv_timeout(timeout) {
            Ok(sample) => Some(sample),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Iterate over the samples currently queued without blocking
    pub fn try_iter(&self) -> TryIter<'_, i16> {
        self.rx.try_iter()
    }

    /// Fill `buf` with queued samples, padding the rest with silence
    ///
    /// Returns the number of real samples written. This is the shape an
    /// audio device callback wants.
    pub fn fill(&self, buf: &mut [i16]) -> usize {
        let mut written = 0;
        for slot in buf.iter_mut() {
            match self.rx.try_recv() {
                Ok(sample) => {
                    *slot = sample;
                    written += 1;
                }
                Err(_) => *slot = 0,
            }
        }
        written
    }

    /// Get the number of queued samples
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Check whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Get the queue capacity
    pub fn capacity(&self) -> usize {
        self.rx.capacity().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_stream_fifo_order() {
        let (sink, stream) = sample_stream(4);

        for sample in [1, -2, 3] {
            assert!(sink.push(sample));
        }

        assert_eq!(stream.len(), 3);
        assert_eq!(stream.try_iter().collect::<Vec<_>>(), vec![1, -2, 3]);
        assert!(stream.is_empty());
        assert_eq!(stream.try_recv(), None);
    }

    #[test]
    fn test_stream_capacity() {
        let (sink, stream) = sample_stream(100);
        assert_eq!(sink.capacity(), 100);
        assert_eq!(stream.capacity(), 100);

        // Zero would be a rendezvous channel; clamp to one slot
        let (sink, _stream) = sample_stream(0);
        assert_eq!(sink.capacity(), 1);
    }

    #[test]
    fn test_stream_full_reports() {
        let (sink, _stream) = sample_stream(2);

        sink.push(1);
        assert!(!sink.is_full());
        sink.push(2);
        assert!(sink.is_full());
    }

    #[test]
    fn test_push_blocks_until_consumer_drains() {
        let (sink, stream) = sample_stream(2);
        sink.push(10);
        sink.push(20);

        let consumer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            let first = stream.recv();
            (first, stream)
        });

        // Blocks until the consumer takes the first sample
        assert!(sink.push(30));

        let (first, stream) = consumer.join().unwrap();
        assert_eq!(first, Some(10));
        assert_eq!(stream.try_iter().collect::<Vec<_>>(), vec![20, 30]);
    }

    #[test]
    fn test_fill_pads_with_silence() {
        let (sink, stream) = sample_stream(8);
        sink.push(5);
        sink.push(6);

        let mut buf = [99i16; 4];
        assert_eq!(stream.fill(&mut buf), 2);
        assert_eq!(buf, [5, 6, 0, 0]);
    }

    #[test]
    fn test_disconnected_producer() {
        let (sink, stream) = sample_stream(4);
        sink.push(7);
        drop(sink);

        assert_eq!(stream.recv(), Some(7));
        assert_eq!(stream.recv(), None);
        assert_eq!(stream.recv_timeout(Duration::from_millis(1)), None);
    }

    #[test]
    fn test_push_fails_without_consumers() {
        let (sink, stream) = sample_stream(4);
        drop(stream);

        assert!(!sink.push(1));
    }
}
