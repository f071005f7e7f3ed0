//! Grows the classic "buys computer" tree and prints it.
//! ```shell
//! cargo run --example buys_computer
//! ```
use minitrees::{Id3, SampleReader};

fn main() -> std::io::Result<()> {
    let sample = SampleReader::default()
        .file("data/buys_computer.json")
        .read()?;

    let tree = Id3::new().fit(&sample);
    tree.print();
    println!();

    let predictions = tree.classify_all(&sample);
    let n_sample = sample.shape().0;
    let loss = sample.records()
        .iter()
        .zip(predictions)
        .map(|(record, label)| {
            let truth = record.get(sample.target());
            if truth == label.as_str() { 0f64 } else { 1f64 }
        })
        .sum::<f64>()
        / n_sample as f64;
    println!("loss (train) is: {loss}");

    Ok(())
}
