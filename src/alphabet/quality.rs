//! 测序质量分数字母表：`Phred42` / `Phred63` / `Phred68Legacy`。
//!
//! 质量字母表以 phred 分数为序：秩与 phred 等级一一对应，字符表示按
//! 固定偏移投影到可打印 ASCII 区间。`from_char` 把窗口外的字符夹取进
//! 合法秩范围（低于偏移取 0，高于顶端取最大秩），绝不失败。

use serde::{Deserialize, Serialize};

use super::{Alphabet, QualityAlphabet};

/// Sanger / Illumina 1.8+ 常规测序质量分数，phred 取值 `[0, 41]`。
///
/// 字符以 `!` 为偏移，覆盖 `!`..`J`；原始测序数据的典型范围。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Phred42(u8);

impl Phred42 {
    /// 字符与秩之间的投影偏移。
    pub const OFFSET_CHAR: u8 = b'!';
}

impl Alphabet for Phred42 {
    const SIZE: usize = 42;

    #[inline]
    fn to_rank(self) -> u8 {
        self.0
    }

    #[inline]
    fn from_rank(rank: u8) -> Self {
        debug_assert!((rank as usize) < Self::SIZE);
        Phred42(rank)
    }

    #[inline]
    fn to_char(self) -> u8 {
        self.0 + Self::OFFSET_CHAR
    }

    #[inline]
    fn from_char(c: u8) -> Self {
        Phred42(c.saturating_sub(Self::OFFSET_CHAR).min(Self::SIZE as u8 - 1))
    }
}

impl QualityAlphabet for Phred42 {
    const VALUE_SIZE: usize = 42;

    #[inline]
    fn to_phred(self) -> i8 {
        self.0 as i8
    }

    #[inline]
    fn from_phred(p: i8) -> Self {
        debug_assert!(p >= 0 && (p as usize) < Self::VALUE_SIZE);
        Phred42(p as u8)
    }
}

/// 完整可打印区间的 Sanger 质量分数，phred 取值 `[0, 62]`。
///
/// 字符以 `!` 为偏移，覆盖 `!`..`~`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Phred63(u8);

impl Phred63 {
    /// 字符与秩之间的投影偏移。
    pub const OFFSET_CHAR: u8 = b'!';
}

impl Alphabet for Phred63 {
    const SIZE: usize = 63;

    #[inline]
    fn to_rank(self) -> u8 {
        self.0
    }

    #[inline]
    fn from_rank(rank: u8) -> Self {
        debug_assert!((rank as usize) < Self::SIZE);
        Phred63(rank)
    }

    #[inline]
    fn to_char(self) -> u8 {
        self.0 + Self::OFFSET_CHAR
    }

    #[inline]
    fn from_char(c: u8) -> Self {
        Phred63(c.saturating_sub(Self::OFFSET_CHAR).min(Self::SIZE as u8 - 1))
    }
}

impl QualityAlphabet for Phred63 {
    const VALUE_SIZE: usize = 63;

    #[inline]
    fn to_phred(self) -> i8 {
        self.0 as i8
    }

    #[inline]
    fn from_phred(p: i8) -> Self {
        debug_assert!(p >= 0 && (p as usize) < Self::VALUE_SIZE);
        Phred63(p as u8)
    }
}

/// Solexa / Illumina 1.0 旧式质量分数，phred 取值 `[-5, 62]`。
///
/// 字符以 `;` 为偏移，秩 0 对应 phred -5；是唯一带负分数的字母表，
/// phred 路径转换（见 [`crate::convert`]）会把负分数夹取到 0。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Phred68Legacy(u8);

impl Phred68Legacy {
    /// 字符与秩之间的投影偏移。
    pub const OFFSET_CHAR: u8 = b';';

    /// 秩 0 对应的 phred 分数。
    pub const OFFSET_PHRED: i8 = -5;
}

impl Alphabet for Phred68Legacy {
    const SIZE: usize = 68;

    #[inline]
    fn to_rank(self) -> u8 {
        self.0
    }

    #[inline]
    fn from_rank(rank: u8) -> Self {
        debug_assert!((rank as usize) < Self::SIZE);
        Phred68Legacy(rank)
    }

    #[inline]
    fn to_char(self) -> u8 {
        self.0 + Self::OFFSET_CHAR
    }

    #[inline]
    fn from_char(c: u8) -> Self {
        Phred68Legacy(c.saturating_sub(Self::OFFSET_CHAR).min(Self::SIZE as u8 - 1))
    }
}

impl QualityAlphabet for Phred68Legacy {
    const VALUE_SIZE: usize = 68;

    #[inline]
    fn to_phred(self) -> i8 {
        self.0 as i8 + Self::OFFSET_PHRED
    }

    #[inline]
    fn from_phred(p: i8) -> Self {
        debug_assert!(p >= Self::OFFSET_PHRED && ((p - Self::OFFSET_PHRED) as usize) < Self::VALUE_SIZE);
        Phred68Legacy((p - Self::OFFSET_PHRED) as u8)
    }
}
