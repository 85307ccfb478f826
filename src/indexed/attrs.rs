//! 属性列存储
//!
//! 每个属性名对应一列，列长度始终等于元素数量，未赋值的格子为 `Null`

use crate::error::{Error, Result};
use crate::types::PropertyValue;
use indexmap::IndexMap;

/// 按列存储的属性表
#[derive(Debug, Clone, Default)]
pub(crate) struct AttributeColumns {
    /// 元素数量
    len: usize,
    /// 属性名 -> 列
    columns: IndexMap<String, Vec<PropertyValue>>,
}

impl AttributeColumns {
    pub fn len(&self) -> usize {
        self.len
    }

    /// 追加 `n` 个元素，已有列用 `Null` 补齐
    pub fn grow(&mut self, n: usize) {
        self.len += n;
        for column in self.columns.values_mut() {
            column.resize(self.len, PropertyValue::Null);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&[PropertyValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn cell(&self, index: usize, name: &str) -> Option<&PropertyValue> {
        self.columns.get(name)?.get(index)
    }

    fn column_mut(&mut self, name: &str) -> &mut Vec<PropertyValue> {
        let len = self.len;
        self.columns
            .entry(name.to_string())
            .or_insert_with(|| vec![PropertyValue::Null; len])
    }

    /// 设置单个元素的属性，调用方负责索引检查
    pub fn set(&mut self, index: usize, name: &str, value: PropertyValue) {
        debug_assert!(index < self.len);
        self.column_mut(name)[index] = value;
    }

    /// 整列赋值，长度必须与元素数量一致
    pub fn set_all(&mut self, name: &str, values: Vec<PropertyValue>) -> Result<()> {
        if values.len() != self.len {
            return Err(Error::AttributeLengthMismatch {
                attribute: name.to_string(),
                expected: self.len,
                actual: values.len(),
            });
        }
        self.columns.insert(name.to_string(), values);
        Ok(())
    }

    /// 将同一个值广播到整列
    pub fn fill(&mut self, name: &str, value: PropertyValue) {
        let len = self.len;
        self.columns.insert(name.to_string(), vec![value; len]);
    }

    /// 删除整列
    pub fn remove(&mut self, name: &str) -> Result<Vec<PropertyValue>> {
        self.columns
            .shift_remove(name)
            .ok_or_else(|| Error::AttributeNotFound(name.to_string()))
    }

    /// 按名称排序的属性名
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        names
    }
}
