//! 顶点/边序列
//!
//! 通过序列按索引或按列读写属性：`g.vs_mut().at(0)?.set("name", "Jeremy")`、
//! `g.vs_mut().set_all("followers", [130, 2100])?`

use super::attrs::AttributeColumns;
use crate::error::{Error, Result};
use crate::types::{Properties, PropertyValue};

/// 序列元素类型，决定越界错误的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Vertex,
    Edge,
}

impl ElementKind {
    fn out_of_range(self, index: usize, count: usize) -> Error {
        match self {
            ElementKind::Vertex => Error::VertexIndexOutOfRange { index, count },
            ElementKind::Edge => Error::EdgeIndexOutOfRange { index, count },
        }
    }
}

/// 只读属性序列
pub struct AttributeSeq<'a> {
    attrs: &'a AttributeColumns,
    kind: ElementKind,
}

impl<'a> AttributeSeq<'a> {
    pub(crate) fn new(attrs: &'a AttributeColumns, kind: ElementKind) -> Self {
        Self { attrs, kind }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.len() == 0
    }

    /// 获取整列属性
    pub fn get(&self, name: &str) -> Option<&'a [PropertyValue]> {
        self.attrs.column(name)
    }

    /// 属性名（按添加顺序）
    pub fn attribute_names(&self) -> Vec<&'a str> {
        self.attrs.names().collect()
    }

    /// 按索引获取元素
    pub fn at(&self, index: usize) -> Result<Element<'a>> {
        if index >= self.attrs.len() {
            return Err(self.kind.out_of_range(index, self.attrs.len()));
        }
        Ok(Element {
            attrs: self.attrs,
            index,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Element<'a>> + 'a {
        let attrs = self.attrs;
        (0..attrs.len()).map(move |index| Element { attrs, index })
    }

    /// 按 `name` 属性查找第一个匹配的元素
    pub fn find(&self, name: &str) -> Option<usize> {
        self.attrs
            .column("name")?
            .iter()
            .position(|value| value.as_str() == Some(name))
    }
}

/// 可写属性序列
pub struct AttributeSeqMut<'a> {
    attrs: &'a mut AttributeColumns,
    kind: ElementKind,
}

impl<'a> AttributeSeqMut<'a> {
    pub(crate) fn new(attrs: &'a mut AttributeColumns, kind: ElementKind) -> Self {
        Self { attrs, kind }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.len() == 0
    }

    /// 按索引获取可写元素
    pub fn at(&mut self, index: usize) -> Result<ElementMut<'_>> {
        if index >= self.attrs.len() {
            return Err(self.kind.out_of_range(index, self.attrs.len()));
        }
        Ok(ElementMut {
            attrs: &mut *self.attrs,
            index,
        })
    }

    /// 整列赋值，值的数量必须等于元素数量；失败时原列保持不变
    pub fn set_all<I>(&mut self, name: &str, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<PropertyValue>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.attrs.set_all(name, values)
    }

    /// 将同一个值赋给所有元素
    pub fn fill(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.attrs.fill(name, value.into());
    }

    /// 删除属性列
    pub fn remove(&mut self, name: &str) -> Result<Vec<PropertyValue>> {
        self.attrs.remove(name)
    }
}

/// 序列中的只读元素
#[derive(Clone, Copy)]
pub struct Element<'a> {
    attrs: &'a AttributeColumns,
    index: usize,
}

impl<'a> Element<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// 获取属性，列不存在时返回 `None`
    pub fn get(&self, name: &str) -> Option<&'a PropertyValue> {
        self.attrs.cell(self.index, name)
    }

    /// 该元素的全部属性（含 `Null`）
    pub fn attributes(&self) -> Properties {
        self.attrs
            .names()
            .filter_map(|name| {
                let value = self.attrs.cell(self.index, name)?;
                Some((name.to_string(), value.clone()))
            })
            .collect()
    }
}

/// 序列中的可写元素
pub struct ElementMut<'a> {
    attrs: &'a mut AttributeColumns,
    index: usize,
}

impl ElementMut<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.attrs.cell(self.index, name)
    }

    /// 设置属性，列不存在时自动创建并以 `Null` 填充其他元素
    pub fn set(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.attrs.set(self.index, name, value.into());
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::indexed::IndexedGraph;
    use crate::types::PropertyValue;

    #[test]
    fn test_single_assignment() {
        let mut g = IndexedGraph::new();
        g.add_vertices(2);
        g.vs_mut().at(0).unwrap().set("name", "Jeremy");
        g.vs_mut().at(1).unwrap().set("followers", 2100);

        let vs = g.vs();
        assert_eq!(vs.at(0).unwrap().get("name"), Some(&PropertyValue::from("Jeremy")));
        assert_eq!(vs.at(1).unwrap().get("name"), Some(&PropertyValue::Null));
        assert_eq!(vs.at(0).unwrap().get("followers"), Some(&PropertyValue::Null));
        assert_eq!(vs.at(0).unwrap().get("missing"), None);
    }

    #[test]
    fn test_out_of_range() {
        let mut g = IndexedGraph::new();
        g.add_vertices(2);

        assert!(matches!(
            g.vs_mut().at(2),
            Err(Error::VertexIndexOutOfRange { index: 2, count: 2 })
        ));
        assert!(matches!(
            g.es().at(0),
            Err(Error::EdgeIndexOutOfRange { index: 0, count: 0 })
        ));
    }

    #[test]
    fn test_bulk_assignment_overwrites() {
        let mut g = IndexedGraph::new();
        g.add_vertices(2);
        g.vs_mut().at(0).unwrap().set("name", "Someone");
        g.vs_mut().set_all("name", ["Jeremy", "Mark"]).unwrap();

        assert_eq!(
            g.vs().get("name").unwrap(),
            &[PropertyValue::from("Jeremy"), PropertyValue::from("Mark")]
        );
        assert!(g.vs_mut().set_all("name", ["Only"]).is_err());
        assert_eq!(g.vs().find("Mark"), Some(1));
        assert_eq!(g.vs().find("Nobody"), None);
    }

    #[test]
    fn test_fill_and_attributes() {
        let mut g = IndexedGraph::new();
        g.add_vertices(3);
        g.vs_mut().fill("active", true);
        g.vs_mut().at(2).unwrap().set("name", "c");

        let attrs = g.vs().at(2).unwrap().attributes();
        assert_eq!(attrs.get("active"), Some(&PropertyValue::Bool(true)));
        assert_eq!(attrs.get("name"), Some(&PropertyValue::from("c")));
        assert_eq!(g.vs().iter().count(), 3);
        assert_eq!(g.vs().attribute_names(), vec!["active", "name"]);
    }
}
