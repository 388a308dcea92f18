//! 演示如何在 library 模式下使用 alphabet-rust 进行字母表转换。
//!
//! 运行方式：
//! ```bash
//! cargo run --example convert_reads
//! ```

use alphabet_rust::alphabet::{Dna15, Dna5, Phred42, Phred63, QualityAlphabet};
use alphabet_rust::convert::ConversionTable;
use alphabet_rust::util::seq;

fn main() {
    // 1. 把一条带 IUPAC 简并码的 read 编码为 Dna15
    let read = b"ACGTRYSWKMacgtn";
    let bases = seq::encode::<Dna15>(read);
    println!("原始序列: {}", String::from_utf8_lossy(read));
    println!("规范形式: {}", String::from_utf8_lossy(&seq::decode(&bases)));

    // 2. 经字符路径转换到 5 字母字母表，简并码落到 N
    let to_dna5 = ConversionTable::<Dna5, Dna15>::through_char();
    let narrowed = seq::convert_seq(&to_dna5, &bases);
    println!("Dna5 形式: {}", String::from_utf8_lossy(&seq::decode(&narrowed)));

    // 3. 反向互补
    let rc = seq::revcomp(&bases);
    println!("反向互补: {}", String::from_utf8_lossy(&seq::decode(&rc)));

    // 4. 质量字符串经 phred 路径从 Phred42 转到 Phred63
    let qual_line = b"IIIIGGGG!!##JJJ";
    let quals = seq::encode::<Phred42>(qual_line);
    let to_phred63 = ConversionTable::<Phred63, Phred42>::through_phred();
    let widened = seq::convert_seq(&to_phred63, &quals);
    println!("质量字符: {}", String::from_utf8_lossy(qual_line));
    println!(
        "phred 分数: {:?}",
        widened.iter().map(|q| q.to_phred()).collect::<Vec<_>>()
    );
}
