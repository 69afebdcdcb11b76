//! Generate command implementation.
//!
//! The requested count is split into fixed-size chunks; chunk `i` draws from
//! a synthesizer seeded `seed + i`. The emitted stream therefore depends only
//! on `(seed, count)` - requesting parallel generation changes wall-clock
//! time, never the output.

use super::{CliError, OutputFormat};
use rayon::prelude::*;
use rvgen::{EncodedInstruction, Synthesizer};

/// Instructions per work unit.
const CHUNK_SIZE: u64 = 1024;

/// Execute the generate command.
///
/// # Errors
///
/// Returns an error if the thread pool cannot be built or the output cannot
/// be serialized.
pub(crate) fn execute(
    count: u64,
    seed: Option<u64>,
    format: OutputFormat,
    threads: Option<usize>,
) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let instructions = match threads {
        Some(threads) => generate_parallel(seed, count, threads)?,
        None => generate_chunked(seed, count),
    };

    match format {
        OutputFormat::Text => {
            for inst in &instructions {
                println!("{}\n{:x}\n", inst.asm, inst.word);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&instructions)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Synthesize one chunk's worth of instructions.
fn generate_chunk(seed: u64, count: u64, chunk: u64) -> Vec<EncodedInstruction> {
    let mut synth = Synthesizer::new(seed.wrapping_add(chunk));
    let len = CHUNK_SIZE.min(count - chunk * CHUNK_SIZE);
    (0..len).map(|_| synth.synthesize()).collect()
}

/// Generate all chunks on the calling thread, in order.
fn generate_chunked(seed: u64, count: u64) -> Vec<EncodedInstruction> {
    (0..count.div_ceil(CHUNK_SIZE))
        .flat_map(|chunk| generate_chunk(seed, count, chunk))
        .collect()
}

/// Generate chunks across a rayon pool, then reassemble in chunk order.
fn generate_parallel(
    seed: u64,
    count: u64,
    threads: usize,
) -> Result<Vec<EncodedInstruction>, CliError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| CliError::new(format!("Failed to build thread pool: {e}")))?;

    let batches: Vec<Vec<EncodedInstruction>> = pool.install(|| {
        (0..count.div_ceil(CHUNK_SIZE))
            .into_par_iter()
            .map(|chunk| generate_chunk(seed, count, chunk))
            .collect()
    });

    Ok(batches.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunked_counts_are_exact() {
        for count in [1, 25, CHUNK_SIZE, CHUNK_SIZE + 1, 3 * CHUNK_SIZE + 7] {
            assert_eq!(generate_chunked(5, count).len() as u64, count);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let count = 2 * CHUNK_SIZE + 100;
        let sequential = generate_chunked(77, count);
        let parallel = generate_parallel(77, count, 4).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_chunked_is_reproducible() {
        assert_eq!(generate_chunked(123, 500), generate_chunked(123, 500));
    }
}
