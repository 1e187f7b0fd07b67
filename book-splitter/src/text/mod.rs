//! Text processing: front-matter detection, cleaning, and word chunking.

pub mod boundary;
pub mod chunker;
mod normalizer;

pub use boundary::{detect_boundary, Boundary};
pub use chunker::{chunk_into_store, ChunkRun, DEFAULT_CHUNK_SIZE};
pub use normalizer::normalize;

/// Strip front matter and layout artifacts from a raw book.
pub fn prepare_text(raw: &str) -> (Boundary, String) {
    let boundary = detect_boundary(raw);
    let cleaned = normalize(raw, boundary.offset);
    (boundary, cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use super::boundary::BoundaryRule;
    use std::fs;
    use tempfile::TempDir;

    fn narrative(words: usize) -> String {
        let mut lines = Vec::new();
        let mut line = Vec::new();
        for i in 0..words {
            line.push(format!("palavra{}", i));
            if line.len() == 20 {
                lines.push(line.join(" "));
                line.clear();
            }
        }
        if !line.is_empty() {
            lines.push(line.join(" "));
        }
        lines.join("\n")
    }

    #[test]
    fn test_prepare_text_strips_front_matter() {
        let raw = format!(
            "O LIVRO\nEditora Exemplo\nTodos os direitos reservados\n\nCAPÍTULO 1\n{}\n\n  999  \n",
            narrative(40)
        );
        let (boundary, cleaned) = prepare_text(&raw);

        assert_eq!(boundary.rule(), Some(BoundaryRule::ChapterHeading));
        assert!(cleaned.starts_with("CAPÍTULO 1\npalavra0"));
        assert!(!cleaned.contains("Editora"));
        assert!(!cleaned.contains("999"));
    }

    #[test]
    fn test_book_to_store_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("textos"));

        // The heading adds two words to the 3498 narrative words
        let raw = format!("Capa\nSumário\n\nCAPÍTULO 1\n{}", narrative(3498));
        let (_, cleaned) = prepare_text(&raw);
        let run = chunk_into_store(&cleaned, DEFAULT_CHUNK_SIZE, &store).unwrap();

        assert_eq!(run.created, 4);
        let counts: Vec<usize> = (1..=4)
            .map(|i| {
                fs::read_to_string(store.unit_path(i))
                    .unwrap()
                    .split_whitespace()
                    .count()
            })
            .collect();
        assert_eq!(counts, vec![1000, 1000, 1000, 500]);
        assert!(!fs::read_to_string(store.unit_path(1)).unwrap().contains("Sumário"));
    }
}
