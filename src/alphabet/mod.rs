//! 字母表能力契约与具体字母表实现。
//!
//! 一个字母表是大小固定、可枚举的符号集合：每个取值由 `[0, SIZE)` 内唯一的
//! 整数秩标识，并拥有一个规范字符表示。质量字母表在此之上再提供 phred
//! 分数表示。转换表（见 [`crate::convert`]）只依赖这里定义的契约，
//! 不依赖任何具体类型。

use anyhow::{bail, Result};

pub mod aa;
pub mod dna;
pub mod quality;

pub use aa::Aa27;
pub use dna::{Dna15, Dna4, Dna5, Rna4};
pub use quality::{Phred42, Phred63, Phred68Legacy};

/// 字母表能力契约。
///
/// 实现约定：
/// - `to_rank` 与 `from_rank` 在 `[0, SIZE)` 上互为逆运算；
/// - `from_char` 是全函数：无法识别的字符映射到各字母表自己约定的回退值，
///   绝不失败（可能多对一，`to_char` / `from_char` 不要求互逆）；
/// - `Default` 取值为秩 0。
pub trait Alphabet: Copy + Default + Eq + Send + Sync + 'static {
    /// 字母表大小，秩的取值范围为 `[0, SIZE)`。
    const SIZE: usize;

    /// 取值的秩。
    fn to_rank(self) -> u8;

    /// 秩对应的取值。秩越界属于调用方违约，仅在 debug 下断言。
    fn from_rank(rank: u8) -> Self;

    /// 取值的规范字符表示。
    fn to_char(self) -> u8;

    /// 按本字母表的字符规则解析，未知字符使用回退值。
    fn from_char(c: u8) -> Self;

    /// `c` 是否为某个取值的可接受写法（默认：忽略 ASCII 大小写后能经
    /// `from_char` / `to_char` 往返还原）。
    fn char_is_valid(c: u8) -> bool {
        Self::from_char(c).to_char() == c.to_ascii_uppercase()
    }

    /// `from_char` 的严格版本：未知字符报错而非回退。
    fn from_char_strict(c: u8) -> Result<Self> {
        if !Self::char_is_valid(c) {
            bail!("invalid character {:?} (0x{:02x}) for alphabet", c as char, c);
        }
        Ok(Self::from_char(c))
    }
}

/// 质量字母表能力契约：在 [`Alphabet`] 之上增加 phred 分数表示。
///
/// phred 分数可以为负（Solexa 旧式编码），故取 `i8`；`VALUE_SIZE` 为
/// 可区分的 phred 等级数量，原则上可与 `SIZE` 不同。
pub trait QualityAlphabet: Alphabet {
    /// phred 等级数量。
    const VALUE_SIZE: usize;

    /// 取值的 phred 分数。
    fn to_phred(self) -> i8;

    /// phred 分数对应的取值。分数越界属于调用方违约，仅在 debug 下断言。
    fn from_phred(p: i8) -> Self;
}

/// 核酸字母表：带 Watson-Crick 互补。
pub trait NucleotideAlphabet: Alphabet {
    /// 互补碱基。简并码映射到其互补集合的简并码，`N` 映射到自身。
    fn complement(self) -> Self;
}
