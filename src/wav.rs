use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

// WAVE format tag for integer PCM. Other tags exist (IEEE float = 0x0003,
// A-law = 0x0006, mu-law = 0x0007, extensible = 0xFFFE) but this writer
// only produces integer PCM.
pub const WAVE_FORMAT_PCM: u16 = 0x0001;

// Samples are 32-bit linear PCM.
pub const BYTES_PER_SAMPLE: u16 = 4;

// RIFF descriptor (12) + fmt chunk (24) + data chunk descriptor (8).
pub const HEADER_LEN: usize = 44;

/// PCM stream parameters for the fmt chunk.
#[derive(Debug, Clone, Copy)]
pub struct PcmFormat {
    pub channels: u16,
    pub sample_rate: u32,
}

impl PcmFormat {
    // Size in bytes of one frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * BYTES_PER_SAMPLE
    }

    // Average bytes of data per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    pub fn bits_per_sample(&self) -> u16 {
        BYTES_PER_SAMPLE * 8
    }
}

// Serializes the RIFF/WAVE header for a PCM data chunk of `data_len` bytes.
// Every multi-byte field is written least-significant-byte-first, so the
// output is identical on any host.
fn write_header<W: Write>(w: &mut W, format: &PcmFormat, data_len: u32) -> io::Result<()> {
    // The RIFF chunk size counts everything after the tag and size fields.
    let riff_chunk_size = HEADER_LEN as u32 - 8 + data_len;
    w.write_all(b"RIFF")?;
    w.write_all(&riff_chunk_size.to_le_bytes())?;
    w.write_all(b"WAVE")?;

    // fmt chunk: 16 bytes of fields for plain PCM.
    w.write_all(b"fmt ")?;
    w.write_all(&16u32.to_le_bytes())?;
    w.write_all(&WAVE_FORMAT_PCM.to_le_bytes())?;
    w.write_all(&format.channels.to_le_bytes())?;
    w.write_all(&format.sample_rate.to_le_bytes())?;
    w.write_all(&format.byte_rate().to_le_bytes())?;
    w.write_all(&format.block_align().to_le_bytes())?;
    w.write_all(&format.bits_per_sample().to_le_bytes())?;

    // data chunk descriptor; the sample payload follows immediately.
    w.write_all(b"data")?;
    w.write_all(&data_len.to_le_bytes())?;
    Ok(())
}

pub fn header_bytes(format: &PcmFormat, data_len: u32) -> Vec<u8> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    write_header(&mut header, format, data_len).expect("writing to a Vec cannot fail");
    header
}

// Converts samples to little-endian PCM bytes.
pub fn samples_to_pcm(samples: &[i32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE as usize);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Writes `samples` as a PCM WAV file at `path`, replacing any existing
/// file. The header goes out as one contiguous write and the payload as a
/// second; on failure any partial file is removed so a truncated output is
/// never left behind looking valid.
pub fn write_wav(path: &Path, format: &PcmFormat, samples: &[i32]) -> Result<()> {
    // A trailing partial frame would need pad-byte handling in the chunk
    // sizes, which this writer does not do.
    assert!(
        samples.len() % format.channels as usize == 0,
        "sample count must divide evenly into frames"
    );

    let pcm = samples_to_pcm(samples);
    let header = header_bytes(format, pcm.len() as u32);

    if let Err(err) = write_file(path, &header, &pcm) {
        let _ = fs::remove_file(path);
        return Err(err).with_context(|| format!("failed to write {}", path.display()));
    }
    Ok(())
}

fn write_file(path: &Path, header: &[u8], pcm: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(header)?;
    file.write_all(pcm)?;
    Ok(())
}
