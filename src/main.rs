mod synth;
mod wav;

use std::path::Path;

use synth::DialTone;
use wav::PcmFormat;

const PATH: &str = "dialtone.wav";

fn main() -> Result<(), anyhow::Error> {
    let tone = DialTone::default();
    let samples = tone.synthesize();

    let format = PcmFormat {
        channels: tone.channels,
        sample_rate: tone.sample_rate,
    };
    wav::write_wav(Path::new(PATH), &format, &samples)?;

    println!("Wrote {}", PATH);
    Ok(())
}
