use std::fmt::Write;

/// A schema with `type_count` object types, each with a scalar field, a
/// list field and a link to the next type.
pub fn chained_schema(type_count: usize) -> String {
    let mut out = String::with_capacity(type_count * 80);
    out.push_str("type Query { root: Node0 }\n");
    for i in 0..type_count {
        let next = (i + 1) % type_count;
        writeln!(
            out,
            "type Node{i} {{ id: ID! name: String tags: [String!] next: Node{next} }}",
        ).unwrap();
    }
    out
}

/// A query descending `depth` levels through the chained schema, with a
/// fragment spread at every level.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 40);
    out.push_str("query DeeplyNested($first: Int) {\n  root {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 2);
        writeln!(out, "{indent}...Fields{level}").unwrap();
        writeln!(out, "{indent}next {{").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 2);
    writeln!(out, "{inner_indent}id").unwrap();
    for level in (0..depth + 1).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    for level in 0..depth {
        writeln!(
            out,
            "fragment Fields{level} on Node{level} {{ id name tags }}",
        ).unwrap();
    }
    out
}

/// A query whose variables all reference undefined types, so every rule
/// that suggests alternatives does so.
pub fn misspelled_variables_query(var_count: usize) -> String {
    let mut out = String::from("query Misspelled(");
    for i in 0..var_count {
        write!(out, "$v{i}: Nod{i} ").unwrap();
    }
    out.push_str(") { root { id nmae } }\n");
    out
}
