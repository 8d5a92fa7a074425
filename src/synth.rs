use std::f64::consts::TAU;

// Parameters for one second of the U.S. dial tone: a 350 Hz sine in the
// left channel and a 440 Hz sine in the right.
pub struct DialTone {
    pub channels: u16,
    pub sample_rate: u32,
    pub gain: f64, // 0.0 = silence, 1.0 = max volume
    pub ring1_hz: f64,
    pub ring2_hz: f64,
}

impl Default for DialTone {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 16_000,
            gain: 0.1,
            ring1_hz: 350.0,
            ring2_hz: 440.0,
        }
    }
}

impl DialTone {
    // Generates one second of interleaved signed 32-bit samples, one sine
    // oscillator per channel. Pure function of the parameters: same inputs,
    // same buffer.
    pub fn synthesize(&self) -> Vec<i32> {
        // The dual-oscillator interleave below is hard-coded to stereo.
        assert!(
            self.channels == 2,
            "sample generator assumes exactly two channels"
        );
        let sample_count = self.sample_rate as usize * self.channels as usize;
        // An odd sample count would need a pad byte at the end of the data
        // chunk, which the serializer does not handle.
        assert!(
            sample_count % 2 == 0,
            "number of samples must be even, pad bytes are not handled"
        );

        let amplitude = i32::MAX as f64 * self.gain;
        let step1 = self.ring1_hz / self.sample_rate as f64;
        let step2 = self.ring2_hz / self.sample_rate as f64;

        let mut samples = Vec::with_capacity(sample_count);
        let mut phase1 = 0.0;
        let mut phase2 = 0.0;
        for _ in 0..sample_count / 2 {
            // The `as i32` cast truncates toward zero; amplitude stays well
            // inside the i32 range at any gain in [0, 1].
            samples.push((amplitude * (phase1 * TAU).sin()) as i32);
            samples.push((amplitude * (phase2 * TAU).sin()) as i32);
            // Phases grow without wrapping. Over a one-second buffer the
            // accumulated floating-point error is negligible.
            phase1 += step1;
            phase2 += step2;
        }
        samples
    }
}
