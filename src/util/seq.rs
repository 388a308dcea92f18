//! 序列的批量编码 / 解码 / 转换与反向互补。

use anyhow::{bail, Result};
use rayon::prelude::*;

use crate::alphabet::{Alphabet, NucleotideAlphabet};
use crate::convert::ConversionTable;

/// 把字节序列有损编码为字母表取值（未知字符使用字母表自身的回退值）。
pub fn encode<A: Alphabet>(bytes: &[u8]) -> Vec<A> {
    bytes.iter().map(|&b| A::from_char(b)).collect()
}

/// `encode` 的严格版本：遇到字母表无法识别的字符立即报错，
/// 错误信息给出字符与位置。
pub fn encode_strict<A: Alphabet>(bytes: &[u8]) -> Result<Vec<A>> {
    let mut out = Vec::with_capacity(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        if !A::char_is_valid(b) {
            bail!("invalid character {:?} (0x{:02x}) at position {}", b as char, b, i);
        }
        out.push(A::from_char(b));
    }
    Ok(out)
}

/// 解码回规范字符表示。
pub fn decode<A: Alphabet>(seq: &[A]) -> Vec<u8> {
    seq.iter().map(|&v| v.to_char()).collect()
}

/// 整条序列的字母表转换：逐符号查表。
pub fn convert_seq<O: Alphabet, I: Alphabet>(table: &ConversionTable<O, I>, seq: &[I]) -> Vec<O> {
    seq.iter().map(|&v| table.convert(v)).collect()
}

/// `convert_seq` 的并行版本，长序列时按元素切分到 rayon 线程池。
pub fn convert_seq_par<O: Alphabet, I: Alphabet>(table: &ConversionTable<O, I>, seq: &[I]) -> Vec<O> {
    seq.par_iter().map(|&v| table.convert(v)).collect()
}

/// 反向互补。
pub fn revcomp<A: NucleotideAlphabet>(seq: &[A]) -> Vec<A> {
    seq.iter().rev().map(|&b| b.complement()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Dna15, Dna4, Dna5};

    #[test]
    fn encode_decode_round_trip() {
        let seq = encode::<Dna5>(b"ACGTN");
        assert_eq!(decode(&seq), b"ACGTN");
    }

    #[test]
    fn encode_applies_fallback() {
        let seq = encode::<Dna5>(b"ACGTX");
        assert_eq!(seq[4], Dna5::N);
        assert_eq!(decode(&seq), b"ACGTN");
    }

    #[test]
    fn encode_accepts_lowercase() {
        assert_eq!(decode(&encode::<Dna5>(b"acgtn")), b"ACGTN");
    }

    #[test]
    fn encode_strict_rejects_unknown() {
        assert!(encode_strict::<Dna5>(b"ACGTX").is_err());
        assert_eq!(decode(&encode_strict::<Dna5>(b"acGTN").unwrap()), b"ACGTN");
    }

    #[test]
    fn encode_strict_names_position() {
        let err = encode_strict::<Dna4>(b"ACGN").unwrap_err();
        assert!(err.to_string().contains("position 3"), "unexpected message: {}", err);
    }

    #[test]
    fn convert_seq_maps_every_symbol() {
        let table = ConversionTable::<Dna15, Dna5>::through_char();
        let seq = encode::<Dna5>(b"ACGTN");
        let out = convert_seq(&table, &seq);
        assert_eq!(decode(&out), b"ACGTN");
    }

    #[test]
    fn convert_seq_par_agrees_with_serial() {
        let table = ConversionTable::<Dna5, Dna15>::through_char();
        // 确定性伪随机序列，覆盖所有 15 个秩
        let mut x: u32 = 1_234_567;
        let mut seq = Vec::with_capacity(2000);
        for _ in 0..2000 {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            seq.push(Dna15::from_rank((x % 15) as u8));
        }
        assert_eq!(convert_seq(&table, &seq), convert_seq_par(&table, &seq));
    }

    #[test]
    fn revcomp_reverses_and_complements() {
        let seq = encode::<Dna4>(b"AACG");
        assert_eq!(decode(&revcomp(&seq)), b"CGTT");
    }

    #[test]
    fn revcomp_empty() {
        assert!(revcomp::<Dna4>(&[]).is_empty());
    }
}
