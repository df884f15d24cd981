use nulltrace_elem::namespace::{SVG_NS, XHTML_NS, XLINK_NS};
use nulltrace_elem::{
    create, ns, svg, trust, ElemError, Element, Event, EventHandler, Node, Props, Value,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn el(node: &Node) -> &Element {
    node.as_element().expect("expected an element")
}

fn e(head: &str) -> Node {
    create(head, (), ()).unwrap()
}

// --- Namespaces ---

#[test]
fn test_ns_creates_elements_in_namespace() {
    let factory = ns(SVG_NS);
    let circle = factory.el("circle").unwrap();
    assert_eq!(el(&circle).namespace_uri(), Some(SVG_NS));
    assert_eq!(el(&circle).local_name(), "circle");
}

#[test]
fn test_default_namespace_is_xhtml() {
    assert_eq!(el(&e("div")).namespace_uri(), Some(XHTML_NS));
}

#[test]
fn test_svg_factory() {
    let circle = svg().el("circle").unwrap();
    assert_eq!(el(&circle).namespace_uri(), Some(SVG_NS));
    assert_eq!(circle.node_name(), "circle");
}

// --- Descriptor ---

#[test]
fn test_creates_specified_element_type() {
    assert_eq!(e("div").node_name(), "DIV");
    assert_eq!(e("a").node_name(), "A");
    assert_eq!(e("em").node_name(), "EM");
    assert_eq!(e("script").node_name(), "SCRIPT");
}

#[test]
fn test_sets_classes() {
    assert_eq!(el(&e("div.foo")).class_name(), "foo");
    assert_eq!(el(&e("div.foo.bar")).class_name(), "foo bar");
}

#[test]
fn test_sets_id_and_classes() {
    let node = e("div#foo.bar.baz");
    assert_eq!(node.node_name(), "DIV");
    assert_eq!(el(&node).id(), "foo");
    assert_eq!(el(&node).class_name(), "bar baz");
}

#[test]
fn test_defaults_to_div() {
    assert_eq!(e(".foo").node_name(), "DIV");
    assert_eq!(e("#foo.bar").node_name(), "DIV");
    assert_eq!(e("#foo.bar.baz").node_name(), "DIV");
}

#[test]
fn test_hyphens_in_id_and_class() {
    assert_eq!(el(&e(".foo-bar.bar-baz")).class_name(), "foo-bar bar-baz");
    assert_eq!(el(&e("#foo-bar")).id(), "foo-bar");
}

#[test]
fn test_bracket_boolean_attribute() {
    let node = e("input[disabled]");
    assert_eq!(el(&node).property("disabled"), Some(Value::Bool(true)));
    assert_eq!(el(&node).get_attribute("disabled"), Some("disabled"));
}

#[test]
fn test_bracket_flag_attribute_is_empty() {
    let node = e("input[data-flag]");
    assert_eq!(el(&node).get_attribute("data-flag"), Some(""));
}

#[test]
fn test_bag_overrides_bracket_attributes() {
    let node = create(
        "textarea[width=100][height=200]",
        Props::new().with("width", 300),
        (),
    )
    .unwrap();
    assert_eq!(el(&node).get_attribute("width"), Some("300"));
    assert_eq!(el(&node).get_attribute("height"), Some("200"));
}

#[test]
fn test_bracket_event_key_is_a_property() {
    let node = e("div[onclick=go]");
    assert_eq!(el(&node).property("onclick"), Some(Value::from("go")));
    assert!(!el(&node).has_attribute("onclick"));
}

#[test]
fn test_invalid_tag_propagates_platform_error() {
    let result = create("9lives", (), ());
    assert!(matches!(result, Err(ElemError::InvalidCharacter { .. })));
}

// --- Props ---

#[test]
fn test_props_are_optional() {
    let node = create("div", "foo", ()).unwrap();
    assert_eq!(el(&node).inner_markup(), "foo");
}

#[test]
fn test_sets_element_attributes() {
    let src = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
    let props = Props::new()
        .with("src", src)
        .with("width", 100)
        .with("height", 200);
    let img = create("img", props, ()).unwrap();
    assert_eq!(el(&img).get_attribute("src"), Some(src));
    assert_eq!(el(&img).get_attribute("width"), Some("100"));
    assert_eq!(el(&img).get_attribute("height"), Some("200"));
}

#[test]
fn test_sets_event_handlers() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let handler = EventHandler::new(move |event: &Event| log.borrow_mut().push(event.kind().to_string()));

    let img = create("img", Props::new().with("onclick", handler.clone()), ()).unwrap();
    assert_eq!(el(&img).property("onclick"), Some(Value::Handler(handler)));

    el(&img).dispatch_event(&Event::new("click"));
    assert_eq!(*seen.borrow(), vec!["click".to_string()]);
}

#[test]
fn test_class_and_class_name_append() {
    let props = Props::new().with("class", "bar baz").with("className", "bax");
    let node = create(".foo", props, ()).unwrap();
    assert_eq!(el(&node).class_name(), "foo bar baz bax");
    assert_eq!(el(&node).class_list(), vec!["foo", "bar", "baz", "bax"]);
}

#[test]
fn test_style_object() {
    let style = Props::new().with("backgroundColor", "black").with("width", "10px");
    let node = create("div", Props::new().with("style", style), ()).unwrap();
    assert_eq!(
        el(&node).get_attribute("style"),
        Some("background-color: black; width: 10px;")
    );
}

#[test]
fn test_style_string() {
    let node = create("div", Props::new().with("style", "color: red"), ()).unwrap();
    assert_eq!(el(&node).style().get_property_value("color"), Some("red"));
}

// --- Children ---

#[test]
fn test_children_are_optional() {
    assert_eq!(el(&e("div")).inner_markup(), "");
    assert_eq!(el(&create("div", Props::new(), ()).unwrap()).inner_markup(), "");
}

#[test]
fn test_string_child_appends_text_node() {
    for node in [
        create("div", Props::new(), "foo").unwrap(),
        create("div", "foo", ()).unwrap(),
    ] {
        assert_eq!(node.children().count(), 0);
        assert_eq!(node.child_nodes().len(), 1);
        assert_eq!(node.child_nodes()[0].node_value(), Some("foo"));
    }
}

#[test]
fn test_empty_string_child_appends_empty_text_node() {
    for node in [
        create("div", Props::new(), "").unwrap(),
        create("div", "", ()).unwrap(),
    ] {
        assert_eq!(node.child_nodes().len(), 1);
        assert_eq!(node.child_nodes()[0].node_value(), Some(""));
    }
}

#[test]
fn test_number_child() {
    let node = create("span", 0, ()).unwrap();
    assert_eq!(node.child_nodes()[0].node_value(), Some("0"));
}

#[test]
fn test_element_child() {
    let child = e("h1");
    let container = create("div", Props::new(), child.clone()).unwrap();
    assert_eq!(container.children().count(), 1);
    assert_eq!(container.child_nodes()[0], child);

    let container = create("div", child.clone(), ()).unwrap();
    assert_eq!(container.child_nodes(), &[child][..]);
}

#[test]
fn test_array_of_elements() {
    let children = vec![e("h1"), e("em")];
    let container = create("div", Props::new(), children.clone()).unwrap();
    assert_eq!(container.child_nodes(), children.as_slice());
    let container = create("div", children.clone(), ()).unwrap();
    assert_eq!(container.child_nodes(), children.as_slice());
}

#[test]
fn test_array_of_text() {
    let container = create("div", vec!["foo", ""], ()).unwrap();
    let values: Vec<_> = container.child_nodes().iter().map(Node::node_value).collect();
    assert_eq!(values, vec![Some("foo"), Some("")]);
}

#[test]
fn test_array_ignores_other_values() {
    let children = || {
        vec![
            Value::from(e("h1")),
            Value::from("foo"),
            Value::from(""),
            Value::from(e("em")),
            Value::Array(vec![]),
            Value::from(Props::new()),
            Value::Null,
            Value::from(true),
            Value::from(false),
            Value::from(None::<&str>),
        ]
    };
    for container in [
        create("div", Props::new(), children()).unwrap(),
        create("div", children(), ()).unwrap(),
    ] {
        let nodes = container.child_nodes();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0], e("h1"));
        assert_eq!(nodes[1].node_value(), Some("foo"));
        assert_eq!(nodes[2].node_value(), Some(""));
        assert_eq!(nodes[3], e("em"));
    }
}

#[test]
fn test_other_values_are_ignored() {
    let ignored = || {
        vec![
            Value::from(Props::new()),
            Value::Null,
            Value::from(true),
            Value::from(false),
        ]
    };
    for value in ignored() {
        assert!(create("div", Props::new(), value).unwrap().child_nodes().is_empty());
    }
    for value in ignored().into_iter().skip(1) {
        assert!(create("div", value, ()).unwrap().child_nodes().is_empty());
    }
}

#[test]
fn test_text_is_escaped() {
    let node = create("div", "<b>hi</b>", ()).unwrap();
    assert_eq!(node.child_nodes().len(), 1);
    assert_eq!(el(&node).inner_markup(), "&lt;b&gt;hi&lt;/b&gt;");
}

#[test]
fn test_trusted_markup_is_parsed() {
    let node = create("div", trust("a <b>hi</b> c"), ()).unwrap();
    assert_eq!(node.child_nodes().len(), 3);
    assert_eq!(node.children().next().map(Element::tag_name), Some("B".to_string()));
    assert_eq!(el(&node).inner_markup(), "a <b>hi</b> c");
}

#[test]
fn test_trusted_markup_mixed_with_other_children() {
    let children = vec![Value::from("x"), Value::from(trust("<i>y</i>")), Value::from(1.5)];
    let node = create("p", children, ()).unwrap();
    assert_eq!(el(&node).inner_markup(), "x<i>y</i>1.5");
}

#[test]
fn test_trusted_markup_is_second_argument() {
    let node = create("p", trust("<em>x</em>"), ()).unwrap();
    assert!(el(&node).attributes().is_empty());
    assert_eq!(el(&node).inner_markup(), "<em>x</em>");
}

#[test]
fn test_trusted_html_void_tags() {
    let node = create("p", trust("line<br>next"), ()).unwrap();
    assert_eq!(node.child_nodes().len(), 3);
    assert_eq!(el(&node).inner_markup(), "line<br>next");
}

#[test]
fn test_trusted_html_named_entities() {
    let node = create("p", trust("a&nbsp;b"), ()).unwrap();
    assert_eq!(node.text_content(), "a\u{a0}b");
    assert_eq!(el(&node).inner_markup(), "a&nbsp;b");
}

#[test]
fn test_trusted_html_unquoted_attributes() {
    let node = create("div", trust("<img src=x.png>"), ()).unwrap();
    let img = node.children().next().unwrap();
    assert_eq!(img.local_name(), "img");
    assert_eq!(img.get_attribute("src"), Some("x.png"));
}

#[test]
fn test_malformed_svg_markup_propagates() {
    let result = svg().with("g", trust("<circle>"));
    assert!(matches!(result, Err(ElemError::Markup(_))));
}

// --- Fragments ---

#[test]
fn test_array_head_returns_fragment() {
    let fragment = create(Vec::<Value>::new(), (), ()).unwrap();
    assert!(fragment.is_fragment());
    assert_eq!(fragment.node_name(), "#document-fragment");
}

#[test]
fn test_fragment_contents() {
    let fragment = create(vec![Value::from(e("li")), Value::from("text"), Value::Null], (), ()).unwrap();
    assert_eq!(fragment.child_nodes().len(), 2);

    let list = create("ul", fragment, ()).unwrap();
    assert_eq!(el(&list).outer_markup(), "<ul><li></li>text</ul>");
}

// --- SVG ---

#[test]
fn test_svg_attributes() {
    let image = svg()
        .with("image", Props::new().with("width", 100).with("height", 200))
        .unwrap();
    assert_eq!(el(&image).get_attribute("width"), Some("100"));
    assert_eq!(el(&image).get_attribute("height"), Some("200"));
}

#[test]
fn test_svg_xlink_attributes() {
    let href = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
    let image = svg()
        .with("image", Props::new().with("xlink:href", href))
        .unwrap();
    assert_eq!(el(&image).get_attribute_ns(Some(XLINK_NS), "href"), Some(href));
    assert!(el(&image).outer_markup().contains("xlink:href="));
}

#[test]
fn test_svg_bracket_xlink_attribute() {
    let used = svg().el("use[xlink:href=#i]").unwrap();
    assert_eq!(el(&used).namespace_uri(), Some(SVG_NS));
    assert_eq!(el(&used).get_attribute_ns(Some(XLINK_NS), "href"), Some("#i"));
    assert_eq!(el(&used).get_attribute_ns(None, "xlink:href"), None);
    assert_eq!(el(&used).outer_markup(), r##"<use xlink:href="#i"></use>"##);
}

#[test]
fn test_svg_fragment_markup_is_svg() {
    let fragment = svg()
        .create(vec![Value::from(trust(r#"<circle r="4"/>"#))], (), ())
        .unwrap();
    let circle = fragment.children().next().unwrap();
    assert_eq!(circle.namespace_uri(), Some(SVG_NS));
}

#[test]
fn test_trusted_markup_in_svg_context() {
    let group = svg().with("g", trust(r#"<circle r="4"/>"#)).unwrap();
    let circle = group.children().next().unwrap();
    assert_eq!(circle.namespace_uri(), Some(SVG_NS));
    assert_eq!(circle.get_attribute("r"), Some("4"));
}

// --- Purity ---

#[test]
fn test_equal_calls_build_independent_nodes() {
    let build = || {
        create(
            "section#main.a[data-x=1]",
            Props::new().with("title", "t"),
            vec!["one", "two"],
        )
        .unwrap()
    };
    let first = build();
    let mut second = build();
    assert_eq!(first, second);

    second
        .as_element_mut()
        .unwrap()
        .set_attribute("title", "changed")
        .unwrap();
    assert_eq!(el(&first).get_attribute("title"), Some("t"));
    assert_ne!(first, second);
}
