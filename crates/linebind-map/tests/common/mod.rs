//! Record types shared by the mapper tests.

#![allow(dead_code)]

use linebind_model::{ColumnMarker, Reflect, ScalarKind, TypeInfo, ValueKind};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Reflect for Point {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Point>()
            .mappable()
            .default_constructor()
            .field("x", ColumnMarker::at(0), |p: &mut Point, v: i32| p.x = v)
            .field("y", ColumnMarker::at(1), |p: &mut Point, v: i32| p.y = v)
            .build()
    }
}

/// A point written as `x|y`, for embedding in comma-separated lines.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Reflect for Coord {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Coord>()
            .separator('|')
            .default_constructor()
            .field("x", ColumnMarker::at(0), |c: &mut Coord, v: i32| c.x = v)
            .field("y", ColumnMarker::at(1), |c: &mut Coord, v: i32| c.y = v)
            .build()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Segment {
    pub start: Coord,
    pub label: String,
}

impl Reflect for Segment {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Segment>()
            .mappable()
            .default_constructor()
            .record_field(
                "start",
                ColumnMarker::at(0).nested(),
                |s: &mut Segment, v: Coord| s.start = v,
            )
            .field("label", ColumnMarker::at(1), |s: &mut Segment, v: String| {
                s.label = v
            })
            .build()
    }
}

/// Nested records reached through both a field and a setter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Route {
    pub from: Coord,
    pub to: Coord,
    pub name: String,
}

impl Reflect for Route {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Route>()
            .separator(';')
            .default_constructor()
            .field("name", ColumnMarker::at(2), |r: &mut Route, v: String| r.name = v)
            .record_field(
                "from",
                ColumnMarker::at(0).nested(),
                |r: &mut Route, v: Coord| r.from = v,
            )
            .record_setter(
                "set_to",
                ColumnMarker::at(1).nested(),
                |r: &mut Route, v: Coord| {
                    r.to = v;
                    Ok(())
                },
            )
            .build()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Reflect for Person {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Person>()
            .mappable()
            .default_constructor()
            .field("name", ColumnMarker::at(0), |p: &mut Person, v: String| p.name = v)
            .field("age", ColumnMarker::at(1), |p: &mut Person, v: i32| p.age = v)
            .build()
    }
}

/// Every scalar kind, with the last three written through setters.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sample {
    pub text: String,
    pub int32: i32,
    pub int64: i64,
    pub int16: i16,
    pub int8: i8,
    pub float32: f32,
    pub float64: f64,
    pub flag: bool,
    pub grade: char,
}

impl Reflect for Sample {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Sample>()
            .mappable()
            .default_constructor()
            .field("text", ColumnMarker::at(0), |s: &mut Sample, v: String| s.text = v)
            .field("int32", ColumnMarker::at(1), |s: &mut Sample, v: i32| s.int32 = v)
            .field("int64", ColumnMarker::at(2), |s: &mut Sample, v: i64| s.int64 = v)
            .field("int16", ColumnMarker::at(3), |s: &mut Sample, v: i16| s.int16 = v)
            .field("int8", ColumnMarker::at(4), |s: &mut Sample, v: i8| s.int8 = v)
            .field("float32", ColumnMarker::at(5), |s: &mut Sample, v: f32| {
                s.float32 = v
            })
            .setter("float64", ColumnMarker::at(6), |s: &mut Sample, v: f64| {
                s.float64 = v;
                Ok(())
            })
            .setter("flag", ColumnMarker::at(7), |s: &mut Sample, v: bool| {
                s.flag = v;
                Ok(())
            })
            .setter("grade", ColumnMarker::at(8), |s: &mut Sample, v: char| {
                s.grade = v;
                Ok(())
            })
            .build()
    }
}

/// Describes itself but carries no record marker.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Unmarked {
    pub value: i32,
}

impl Reflect for Unmarked {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Unmarked>()
            .default_constructor()
            .field("value", ColumnMarker::at(0), |u: &mut Unmarked, v: i32| u.value = v)
            .build()
    }
}

/// Nests a type that is not mappable.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Holder {
    pub inner: Unmarked,
}

impl Reflect for Holder {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Holder>()
            .mappable()
            .default_constructor()
            .record_field(
                "inner",
                ColumnMarker::at(0).nested(),
                |h: &mut Holder, v: Unmarked| h.inner = v,
            )
            .build()
    }
}

/// Nests itself at column 0, so its nested token never shrinks.
#[derive(Debug, Default)]
pub struct Node {
    pub child: Option<Box<Node>>,
}

impl Reflect for Node {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Node>()
            .mappable()
            .default_constructor()
            .record_field(
                "child",
                ColumnMarker::at(0).nested(),
                |n: &mut Node, v: Node| n.child = Some(Box::new(v)),
            )
            .build()
    }
}

/// Marks a scalar field as nested.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NestedScalar {
    pub count: i32,
}

impl Reflect for NestedScalar {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<NestedScalar>()
            .mappable()
            .default_constructor()
            .field(
                "count",
                ColumnMarker::at(0).nested(),
                |n: &mut NestedScalar, v: i32| n.count = v,
            )
            .build()
    }
}

/// A marked field whose type has no coercion.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Blob {
    pub id: i32,
    pub bytes: Vec<u8>,
}

impl Reflect for Blob {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Blob>()
            .mappable()
            .default_constructor()
            .field("id", ColumnMarker::at(0), |b: &mut Blob, v: i32| b.id = v)
            .opaque_field("bytes", ColumnMarker::at(1), |b: &mut Blob, v: Vec<u8>| {
                b.bytes = v
            })
            .build()
    }
}

/// A record-typed setter used without the nested flag.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlatRoute {
    pub to: Coord,
}

impl Reflect for FlatRoute {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<FlatRoute>()
            .mappable()
            .default_constructor()
            .record_setter("set_to", ColumnMarker::at(0), |r: &mut FlatRoute, v: Coord| {
                r.to = v;
                Ok(())
            })
            .build()
    }
}

/// A marked method with two parameters.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pair {
    pub left: i32,
    pub right: i32,
}

impl Reflect for Pair {
    fn type_info() -> TypeInfo {
        let int = ValueKind::Scalar(ScalarKind::Int32);
        TypeInfo::of::<Pair>()
            .mappable()
            .default_constructor()
            .method(
                "set_both",
                Some(ColumnMarker::at(0)),
                vec![int, int],
                |_: &mut Pair, _| Ok(()),
            )
            .build()
    }
}

/// Unmarked methods are not slots, whatever their arity.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tagged {
    pub tag: String,
}

impl Reflect for Tagged {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Tagged>()
            .mappable()
            .default_constructor()
            .method("reset", None, Vec::new(), |t: &mut Tagged, _| {
                t.tag.clear();
                Ok(())
            })
            .unmarked_field("note", |_: &mut Tagged, _: String| {})
            .field("tag", ColumnMarker::at(1), |t: &mut Tagged, v: String| t.tag = v)
            .field("tag", ColumnMarker::at(0), |t: &mut Tagged, v: String| t.tag = v)
            .build()
    }
}

/// Mappable but without a construction path.
#[derive(Debug, Clone, PartialEq)]
pub struct NoConstructor {
    pub value: i32,
}

impl Reflect for NoConstructor {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<NoConstructor>()
            .mappable()
            .field("value", ColumnMarker::at(0), |n: &mut NoConstructor, v: i32| {
                n.value = v
            })
            .build()
    }
}

/// Construction always fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Refuses;

impl Reflect for Refuses {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Refuses>()
            .mappable()
            .constructor(|| Err("connection pool exhausted".to_string()))
            .build()
    }
}

/// A setter that validates its input.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Percentage {
    pub value: i8,
}

impl Reflect for Percentage {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Percentage>()
            .mappable()
            .default_constructor()
            .setter("value", ColumnMarker::at(0), |p: &mut Percentage, v: i8| {
                if !(0..=100).contains(&v) {
                    return Err(format!("{v} is not a percentage"));
                }
                p.value = v;
                Ok(())
            })
            .build()
    }
}
