//! Rendering of normalized category trees with termtree.

use termtree::Tree;

use crate::domain::CategoryListElement;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

/// Label of a single category, e.g. `Shoes (id 7, order 2) [home]`.
pub fn node_label(category: &CategoryListElement) -> String {
    let home = if category.show_on_home { " [home]" } else { "" };
    format!(
        "{} (id {}, order {}){}",
        category.name, category.id, category.order, home
    )
}

impl TreeNodeConvert for CategoryListElement {
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();

        Tree::new(node_label(self)).with_leaves(leaves)
    }
}

// Root level has no node of its own
impl TreeNodeConvert for [CategoryListElement] {
    fn to_tree_string(&self) -> Tree<String> {
        if self.is_empty() {
            return Tree::new("No categories".to_string());
        }
        let leaves: Vec<_> = self.iter().map(|c| c.to_tree_string()).collect();
        Tree::new("categories".to_string()).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: i64, order: i64, children: Vec<CategoryListElement>) -> CategoryListElement {
        CategoryListElement {
            id,
            name: format!("Category {id}"),
            image: String::new(),
            order,
            children,
            show_on_home: false,
        }
    }

    #[test]
    fn given_nested_tree_when_rendering_then_lists_every_node_in_order() {
        let mut root = element(1, 1, vec![element(3, 1, vec![]), element(2, 2, vec![])]);
        root.show_on_home = true;

        let rendered = [root].to_tree_string().to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "categories");
        assert!(lines[1].ends_with("Category 1 (id 1, order 1) [home]"));
        assert!(lines[2].ends_with("Category 3 (id 3, order 1)"));
        assert!(lines[3].ends_with("Category 2 (id 2, order 2)"));
    }

    #[test]
    fn given_empty_list_when_rendering_then_placeholder() {
        let empty: Vec<CategoryListElement> = vec![];

        assert_eq!(empty.to_tree_string().to_string().trim_end(), "No categories");
    }
}
