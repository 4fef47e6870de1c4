use anyhow::{Context, Result};

const N_ROWS: usize = 442;
const TARGET_MIN: f64 = 25.0;
const TARGET_MAX: f64 = 346.0;
const HEADER: [&str; 11] = [
    "age", "sex", "bmi", "bp", "s1", "s2", "s3", "s4", "s5", "s6", "target",
];

/// Seeded draws for synthetic patients (xoshiro256** core, Box-Muller normals).
struct PatientRng([u64; 4]);

impl PatientRng {
    fn seeded(seed: u64) -> Self {
        let mut lanes = [0u64; 4];
        let mut acc = seed;
        for lane in lanes.iter_mut() {
            acc = acc.wrapping_mul(6364136223846793005).wrapping_add(1);
            *lane = acc;
        }
        PatientRng(lanes)
    }

    fn step(&mut self) -> u64 {
        let [a, b, c, d] = self.0;
        let out = b.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let c = c ^ a;
        let d = d ^ b;
        let b = b ^ c;
        let a = a ^ d;
        self.0 = [a, b, c ^ (self.0[1] << 17), d.rotate_left(45)];
        out
    }

    /// Uniform in `[0, 1)` from the top 53 bits.
    fn uniform(&mut self) -> f64 {
        (self.step() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        let radius = (-2.0 * self.uniform().max(1e-15).ln()).sqrt();
        let angle = std::f64::consts::TAU * self.uniform();
        mean + sd * (radius * angle.cos())
    }

    /// A normal draw clipped to the plausible clinical range.
    fn measurement(&mut self, mean: f64, sd: f64, lo: f64, hi: f64) -> f64 {
        self.normal(mean, sd).clamp(lo, hi)
    }

    fn coin(&mut self, p: f64) -> bool {
        self.uniform() < p
    }
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let p = 10f64.powi(decimals);
    (v * p).round() / p
}

/// One patient in clinical units, before standardisation.
fn generate_patient(rng: &mut PatientRng) -> ([f64; 10], f64) {
    let age = rng.measurement(48.5, 13.1, 19.0, 79.0).round();
    let sex = if rng.coin(0.468) { 2.0 } else { 1.0 };
    let bmi = round_to(rng.measurement(26.4, 4.4, 18.0, 42.2), 1);
    let bp = rng.measurement(94.6, 13.8, 62.0, 133.0).round();
    let s1 = rng.measurement(189.1, 34.6, 97.0, 301.0).round();
    // LDL tracks total cholesterol.
    let s2 = round_to(
        (115.4 + 0.85 * (s1 - 189.1) + rng.normal(0.0, 16.0)).clamp(41.6, 242.4),
        1,
    );
    let s3 = rng.measurement(49.8, 12.9, 22.0, 99.0).round();
    let s4 = round_to((s1 / s3 + rng.normal(0.0, 0.5)).clamp(2.0, 9.09), 2);
    let s5 = round_to(rng.measurement(4.64, 0.52, 3.26, 6.11), 4);
    let s6 = rng.measurement(91.3, 11.5, 58.0, 124.0).round();

    let progression = 152.0
        + 10.5 * (bmi - 26.4)
        + 0.95 * (bp - 94.6)
        + 60.0 * (s5 - 4.64)
        - 0.6 * (s3 - 49.8)
        + rng.normal(0.0, 52.0);

    ([age, sex, bmi, bp, s1, s2, s3, s4, s5, s6], progression)
}

/// Centre each column and scale it to unit L2 norm.
fn standardise(rows: &mut [[f64; 10]]) {
    let n = rows.len() as f64;
    for col in 0..10 {
        let mean = rows.iter().map(|r| r[col]).sum::<f64>() / n;
        let norm = rows
            .iter()
            .map(|r| (r[col] - mean).powi(2))
            .sum::<f64>()
            .sqrt();
        for row in rows.iter_mut() {
            row[col] = (row[col] - mean) / norm;
        }
    }
}

/// Linearly map raw progression scores onto `TARGET_MIN..=TARGET_MAX` integers.
fn rescale_targets(raw: &[f64]) -> Vec<f64> {
    let lo = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    raw.iter()
        .map(|&v| (TARGET_MIN + (v - lo) / (hi - lo) * (TARGET_MAX - TARGET_MIN)).round())
        .collect()
}

fn main() -> Result<()> {
    let mut rng = PatientRng::seeded(442);

    let (mut features, raw_targets): (Vec<[f64; 10]>, Vec<f64>) =
        (0..N_ROWS).map(|_| generate_patient(&mut rng)).unzip();

    standardise(&mut features);
    let targets = rescale_targets(&raw_targets);

    let output_path = "assets/diabetes.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output CSV")?;
    writer.write_record(HEADER).context("writing CSV header")?;

    for (row, target) in features.iter().zip(&targets) {
        let mut record: Vec<String> = row.iter().map(|v| format!("{v:.8}")).collect();
        record.push(format!("{target:.1}"));
        writer.write_record(&record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {N_ROWS} synthetic patients to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_is_pinned_to_seed() {
        let mut rng = PatientRng::seeded(442);
        assert_eq!(rng.step(), 16457149066001649513);
        assert_eq!(rng.step(), 14411618505678157128);
    }

    #[test]
    fn measurements_stay_in_range() {
        let mut rng = PatientRng::seeded(7);
        for _ in 0..1000 {
            let v = rng.measurement(50.0, 40.0, 19.0, 79.0);
            assert!((19.0..=79.0).contains(&v));
        }
    }

    #[test]
    fn standardised_columns_have_unit_norm() {
        let mut rng = PatientRng::seeded(442);
        let mut rows: Vec<[f64; 10]> = (0..50).map(|_| generate_patient(&mut rng).0).collect();
        standardise(&mut rows);
        for col in 0..10 {
            let mean: f64 = rows.iter().map(|r| r[col]).sum::<f64>() / 50.0;
            let norm: f64 = rows.iter().map(|r| r[col].powi(2)).sum::<f64>().sqrt();
            assert!(mean.abs() < 1e-12);
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn targets_span_the_fixed_range() {
        let t = rescale_targets(&[-10.0, 3.0, 90.0]);
        assert_eq!(t.first(), Some(&TARGET_MIN));
        assert_eq!(t.last(), Some(&TARGET_MAX));
    }
}
