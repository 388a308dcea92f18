//! # alphabet-rust
//!
//! 受 [SeqAn](https://github.com/seqan/seqan3) 启发的 Rust 版生物序列字母表库。
//!
//! 本 crate 提供有限字母表的秩编码与字母表间转换功能，包括：
//!
//! - **能力契约**：秩 / 字符 / phred 三种表示之间互换的 trait 约束
//! - **具体字母表**：DNA、RNA、IUPAC 简并码、蛋白质以及测序质量分数
//! - **转换表**：经由字符或 phred 规范表示、一次性预计算的字母表间映射
//! - **序列工具**：批量编码 / 解码 / 转换 / 反向互补
//!
//! ## 快速示例
//!
//! ```rust
//! use alphabet_rust::alphabet::{Alphabet, Dna4, Dna15};
//! use alphabet_rust::convert::{self, ConversionTable};
//!
//! // 构建 Dna4 -> Dna15 的字符路径转换表，之后每次转换只是一次下标查询
//! let table = ConversionTable::<Dna15, Dna4>::through_char();
//! assert_eq!(table.convert(Dna4::C), Dna15::C);
//!
//! // 或使用进程级缓存的便捷入口，转换表按类型对只构建一次
//! let v: Dna15 = convert::convert_through_char(Dna4::T);
//! assert_eq!(v.to_char(), b'T');
//! ```
//!
//! ## 模块说明
//!
//! - [`alphabet`] — 字母表能力契约与具体字母表实现
//! - [`convert`] — 预计算转换表的构建、缓存与查询
//! - [`util`] — 序列批量编码 / 解码 / 转换等工具函数
//! - [`exec`] — 顺序执行包装器

pub mod alphabet;
pub mod convert;
pub mod exec;
pub mod util;
