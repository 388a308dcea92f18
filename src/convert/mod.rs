//! 预计算字母表转换表的构建、缓存与查询。
//!
//! 对每个（输出字母表 O，输入字母表 I）类型对，转换表以输入秩为下标、
//! 长度为 `I::SIZE`，一次性全量构建后不可变；此后单个符号的转换只是
//! 一次下标查询，热路径上没有字母表种类分支，也不重新推导。
//!
//! 两条构建路径：
//! - **字符路径**：任意字母表对之间的通用桥接，经规范字符表示中转，
//!   无需为字母表对手写映射；
//! - **phred 路径**：质量字母表之间经 phred 分数中转，保持数值单调，
//!   避免经可打印字符编码（如 Phred+33 偏移）的有损往返。

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, QualityAlphabet};

/// 预计算的字母表转换表。
///
/// 不可变、定长（`I::SIZE`）、按输入秩索引；由调用方持有，
/// 或经 [`char_table`] / [`phred_table`] 取进程级缓存中的共享表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionTable<O, I> {
    /// entries[r] = 输入秩 r 对应的输出取值
    entries: Vec<O>,
    _input: PhantomData<fn(I)>,
}

impl<O: Alphabet, I: Alphabet> ConversionTable<O, I> {
    /// 经字符表示构建转换表。
    ///
    /// 对每个输入秩：解码为输入取值，渲染为规范字符，再按输出字母表
    /// 自身的字符规则解析。输出字母表无法表示该字符时使用其自身的
    /// 回退值，构建不会失败，表也不会只填充一部分。
    pub fn through_char() -> Self {
        let entries = (0..I::SIZE)
            .map(|r| O::from_char(I::from_rank(r as u8).to_char()))
            .collect();
        ConversionTable { entries, _input: PhantomData }
    }

    /// 转换单个符号：一次下标查询。
    #[inline]
    pub fn convert(&self, value: I) -> O {
        self.entries[value.to_rank() as usize]
    }

    /// 表长，等于输入字母表大小。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 以输入秩为下标的全部表项。
    pub fn entries(&self) -> &[O] {
        &self.entries
    }
}

impl<O: QualityAlphabet, I: QualityAlphabet> ConversionTable<O, I> {
    /// 经 phred 表示构建转换表。
    ///
    /// 在 `m = min(I::VALUE_SIZE, O::VALUE_SIZE)` 范围内，输入秩解码出的
    /// phred 分数先夹取到非负（Solexa 旧式编码可为负，输出域中不允许），
    /// 再按输出字母表的 phred 规则赋值；`m` 及之后的秩饱和映射到输出
    /// 字母表的最高取值，保证映射端到端单调。
    pub fn through_phred() -> Self {
        let m = I::VALUE_SIZE.min(O::VALUE_SIZE);
        let top = O::from_rank(O::SIZE as u8 - 1);
        let entries = (0..I::SIZE)
            .map(|r| {
                if r < m {
                    O::from_phred(I::from_rank(r as u8).to_phred().max(0))
                } else {
                    top
                }
            })
            .collect();
        ConversionTable { entries, _input: PhantomData }
    }
}

type TableCache = RwLock<HashMap<(TypeId, TypeId), &'static (dyn Any + Send + Sync)>>;

lazy_static! {
    /// 字符路径转换表缓存，以 (输出类型, 输入类型) 为键。
    static ref CHAR_TABLES: TableCache = RwLock::new(HashMap::new());

    /// phred 路径转换表缓存。与字符路径分开存放：同一质量字母表对
    /// 两条路径的表内容不同，不能共用键。
    static ref PHRED_TABLES: TableCache = RwLock::new(HashMap::new());
}

/// 取缓存中的表；首次使用时在写锁内复查后构建并泄漏为 `'static`，
/// 并发首次调用既不会重复构建，也不会观察到半成品表。
fn cached_table<O, I>(
    cache: &TableCache,
    build: fn() -> ConversionTable<O, I>,
) -> &'static ConversionTable<O, I>
where
    O: Alphabet,
    I: Alphabet,
{
    let key = (TypeId::of::<O>(), TypeId::of::<I>());

    if let Some(table) = cache.read().expect("conversion table cache poisoned").get(&key).copied() {
        return table
            .downcast_ref::<ConversionTable<O, I>>()
            .expect("conversion table cache holds mismatched type");
    }

    let mut map = cache.write().expect("conversion table cache poisoned");
    let table = *map.entry(key).or_insert_with(|| {
        let built: &'static (dyn Any + Send + Sync) = Box::leak(Box::new(build()));
        built
    });
    table
        .downcast_ref::<ConversionTable<O, I>>()
        .expect("conversion table cache holds mismatched type")
}

/// (O, I) 类型对的字符路径转换表，首次调用时构建，进程生命周期内共享。
pub fn char_table<O: Alphabet, I: Alphabet>() -> &'static ConversionTable<O, I> {
    cached_table(&CHAR_TABLES, ConversionTable::<O, I>::through_char)
}

/// (O, I) 类型对的 phred 路径转换表，首次调用时构建，进程生命周期内共享。
pub fn phred_table<O: QualityAlphabet, I: QualityAlphabet>() -> &'static ConversionTable<O, I> {
    cached_table(&PHRED_TABLES, ConversionTable::<O, I>::through_phred)
}

/// 经字符表示转换单个符号（使用缓存表）。
#[inline]
pub fn convert_through_char<O: Alphabet, I: Alphabet>(value: I) -> O {
    char_table::<O, I>().convert(value)
}

/// 经 phred 表示转换单个符号（使用缓存表）。
#[inline]
pub fn convert_through_phred<O: QualityAlphabet, I: QualityAlphabet>(value: I) -> O {
    phred_table::<O, I>().convert(value)
}
