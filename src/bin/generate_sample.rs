use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, in the column layout the dashboard reads.
#[derive(Serialize)]
struct Row<'a> {
    mes: String,
    pais: &'a str,
    moeda_local: &'a str,
    salario_medio_local: f64,
    salario_medio_usd: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (country, currency, units per USD, mean monthly salary in USD)
    let countries = [
        ("Brasil", "BRL", 5.0, 1_450.0),
        ("Estados Unidos", "USD", 1.0, 9_200.0),
        ("Reino Unido", "GBP", 0.79, 5_300.0),
        ("Alemanha", "EUR", 0.92, 5_600.0),
        ("Canadá", "CAD", 1.36, 6_100.0),
        ("Austrália", "AUD", 1.52, 6_400.0),
        ("Índia", "INR", 83.0, 1_100.0),
        ("Japão", "JPY", 150.0, 4_300.0),
        ("Emirados Árabes Unidos", "AED", 3.67, 6_800.0),
        ("África do Sul", "ZAR", 18.5, 2_300.0),
    ];

    let output_path = "sample_salaries.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for month in 1..=12 {
        for &(pais, moeda, rate, mean_usd) in &countries {
            let usd = rng.gauss(mean_usd, mean_usd * 0.05).max(0.0);
            let usd = (usd * 100.0).round() / 100.0;
            writer.serialize(Row {
                mes: format!("2024-{month:02}"),
                pais,
                moeda_local: moeda,
                salario_medio_local: (usd * rate * 100.0).round() / 100.0,
                salario_medio_usd: usd,
            })?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} salary records to {output_path}");
    Ok(())
}
