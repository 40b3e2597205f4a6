//! Corpus construction: observations become indexable, metadata-tagged units.

use crate::domain::{AppError, ReportRequest};

/// One indexable chunk of an observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusUnit {
    /// Index of the source observation in the request.
    pub observation_index: usize,
    /// Position of this chunk within its observation.
    pub segment: usize,
    pub course: String,
    pub year: i32,
    pub text: String,
}

impl CorpusUnit {
    /// Text submitted to the index and to the model as context.
    pub fn render(&self) -> String {
        format!("Disciplina: {}\nAno: {}\nObservações:\n{}", self.course, self.year, self.text)
    }
}

/// Splits text into reading-order segments no longer than `max_chars` characters.
///
/// Segments are contiguous slices of the input: concatenating them yields the
/// original text. Cuts prefer the end of a sentence, then any whitespace, and
/// fall back to a hard cut inside long unbroken runs.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_chars: usize,
}

impl Chunker {
    pub fn new(max_chars: usize) -> Result<Self, AppError> {
        if max_chars == 0 {
            return Err(AppError::config_error("corpus.max_chunk_chars must be greater than 0"));
        }
        Ok(Self { max_chars })
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some((window_end, _)) = rest.char_indices().nth(self.max_chars) {
            let cut = boundary(&rest[..window_end]);
            segments.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }

        // An empty observation still yields one (empty) unit.
        if !rest.is_empty() || segments.is_empty() {
            segments.push(rest.to_string());
        }
        segments
    }
}

/// Byte offset at which to cut `window`; always greater than zero.
fn boundary(window: &str) -> usize {
    let mut sentence_cut = None;
    let mut space_cut = None;
    let mut previous = None;

    for (i, c) in window.char_indices() {
        if c.is_whitespace() {
            let after = i + c.len_utf8();
            if matches!(previous, Some('.' | '!' | '?')) {
                sentence_cut = Some(after);
            }
            space_cut = Some(after);
        }
        previous = Some(c);
    }

    sentence_cut.or(space_cut).unwrap_or(window.len())
}

/// Build the request corpus. Every observation yields at least one unit.
pub fn build_corpus(request: &ReportRequest, chunker: &Chunker) -> Vec<CorpusUnit> {
    request
        .observations()
        .flat_map(|observation| {
            chunker.split(observation.text).into_iter().enumerate().map(move |(segment, text)| {
                CorpusUnit {
                    observation_index: observation.index,
                    segment,
                    course: observation.course.to_string(),
                    year: observation.year,
                    text,
                }
            })
        })
        .collect()
}
