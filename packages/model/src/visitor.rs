use crate::field::{FieldNode, FieldPath, Schema};

/// Visitor pattern for traversing the schema tree immutably
///
/// Default implementations walk the whole tree in pre-order. Every field is
/// visited together with the path of its ancestors, so `path.len()` is the
/// nesting depth. Override `visit_field` and call `walk_field` (or not) to
/// control descent.
pub trait Visitor: Sized {
    fn visit_schema(&mut self, schema: &Schema) {
        walk_fields(self, schema.fields(), &FieldPath::root());
    }

    fn visit_field(&mut self, field: &FieldNode, path: &FieldPath) {
        walk_field(self, field, path);
    }
}

pub fn walk_fields<V: Visitor>(visitor: &mut V, fields: &[FieldNode], path: &FieldPath) {
    for field in fields {
        visitor.visit_field(field, path);
    }
}

pub fn walk_field<V: Visitor>(visitor: &mut V, field: &FieldNode, path: &FieldPath) {
    if let Some(children) = &field.children {
        walk_fields(visitor, children, &path.child(&field.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldId, FieldType};

    struct DepthCollector {
        seen: Vec<(FieldId, usize)>,
    }

    impl Visitor for DepthCollector {
        fn visit_field(&mut self, field: &FieldNode, path: &FieldPath) {
            self.seen.push((field.id.clone(), path.len()));
            walk_field(self, field, path);
        }
    }

    #[test]
    fn test_visits_in_pre_order_with_depth() {
        let schema = Schema::new(vec![
            FieldNode::nested(
                "a",
                "address",
                vec![
                    FieldNode::new("b", "city", FieldType::String),
                    FieldNode::nested("c", "geo", vec![FieldNode::new("d", "lat", FieldType::Float)]),
                ],
            ),
            FieldNode::new("e", "age", FieldType::Number),
        ]);

        let mut collector = DepthCollector { seen: Vec::new() };
        collector.visit_schema(&schema);

        let seen: Vec<(&str, usize)> = collector
            .seen
            .iter()
            .map(|(id, depth)| (id.as_str(), *depth))
            .collect();
        assert_eq!(seen, vec![("a", 0), ("b", 1), ("c", 1), ("d", 2), ("e", 0)]);
    }
}
