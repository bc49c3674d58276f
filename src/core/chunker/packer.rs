//! Greedy packing of sentences into word-bounded chunks.

use super::sentence::{split_sentences, Sentence};
use super::{ChunkingConfig, PackingPolicy};

/// Sentence packer.
///
/// Accumulates sentences until the next one would push the chunk past
/// `max_words`, then flushes. A sentence that is longer than
/// `max_words` on its own is hard-split into fixed windows by
/// [`split_oversized`]; those windows are emitted as standalone chunks
/// and never merge with neighbouring sentences.
///
/// # Example
///
/// ```
/// use shorts_creator::core::chunker::{ChunkingConfig, TextChunker};
///
/// let chunker = TextChunker::new(ChunkingConfig::new(120, 160).unwrap());
/// assert_eq!(chunker.chunk_text("Hello world."), vec!["Hello world."]);
/// assert!(chunker.chunk_text("").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextChunker {
    config: ChunkingConfig,
    policy: PackingPolicy,
}

impl TextChunker {
    /// Create a chunker using the [`PackingPolicy::Greedy`] policy.
    pub fn new(config: ChunkingConfig) -> Self {
        Self {
            config,
            policy: PackingPolicy::default(),
        }
    }

    /// Use a different packing policy.
    pub fn with_policy(mut self, policy: PackingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> ChunkingConfig {
        self.config
    }

    pub fn policy(&self) -> PackingPolicy {
        self.policy
    }

    /// Split text into sentences and pack them into chunks.
    ///
    /// Returns non-empty, trimmed chunk strings in source order. The
    /// words of the chunks, read in order, are exactly the words of the
    /// input.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let sentences = split_sentences(text);
        self.pack(&sentences)
    }

    /// Pack pre-split sentences into chunks.
    pub fn pack(&self, sentences: &[Sentence]) -> Vec<String> {
        let max_words = self.config.max_words();
        let mut chunks = Vec::new();
        let mut current = Accumulator::default();

        for sentence in sentences {
            if sentence.word_count > max_words {
                current.flush_into(&mut chunks);
                chunks.extend(split_oversized(&sentence.text, max_words));
                continue;
            }

            // Strictly greater: a sentence that exactly fills the window stays
            if current.word_count + sentence.word_count > max_words
                && self.should_flush(current.word_count)
            {
                current.flush_into(&mut chunks);
            }

            current.push(sentence);
        }

        current.flush_into(&mut chunks);
        chunks
    }

    fn should_flush(&self, current_words: usize) -> bool {
        match self.policy {
            PackingPolicy::Greedy => true,
            PackingPolicy::FillMinimum => current_words >= self.config.min_words(),
        }
    }
}

/// Chunk text with the default greedy policy.
pub fn chunk_text(text: &str, config: &ChunkingConfig) -> Vec<String> {
    TextChunker::new(*config).chunk_text(text)
}

/// Hard-split a sentence into consecutive windows of `max_words` words.
///
/// Every window holds exactly `max_words` words except the last, which
/// holds the remainder. A word count that is an exact multiple of
/// `max_words` produces no empty trailing window.
pub fn split_oversized(sentence: &str, max_words: usize) -> Vec<String> {
    // ChunkingConfig never produces 0; clamp so `chunks` cannot panic
    let window = max_words.max(1);
    let words: Vec<&str> = sentence.split_whitespace().collect();

    words.chunks(window).map(|w| w.join(" ")).collect()
}

/// Sentences waiting to be flushed as one chunk
#[derive(Default)]
struct Accumulator<'a> {
    sentences: Vec<&'a str>,
    word_count: usize,
}

impl<'a> Accumulator<'a> {
    fn push(&mut self, sentence: &'a Sentence) {
        self.sentences.push(&sentence.text);
        self.word_count += sentence.word_count;
    }

    fn flush_into(&mut self, chunks: &mut Vec<String>) {
        if !self.sentences.is_empty() {
            chunks.push(self.sentences.join(" ").trim().to_string());
        }
        self.sentences.clear();
        self.word_count = 0;
    }
}
