use serde::Serialize;

use super::operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};

/// `var`, `let` or `const`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LiteralKind {
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    RegExp,
}

/// Object literal property kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// Class member kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

/// Shared payload of function declarations and function expressions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Function {
    pub id: Option<String>,
    pub params: Vec<Node>,
    /// Always a `BlockStatement`.
    pub body: Box<Node>,
    pub is_async: bool,
    pub is_generator: bool,
}

/// Shared payload of class declarations and class expressions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Class {
    pub id: Option<String>,
    pub super_class: Option<Box<Node>>,
    /// `MethodDefinition` nodes.
    pub body: Vec<Node>,
}

/// A syntax tree node. Variant names follow ESTree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Program {
        body: Vec<Node>,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    ExpressionStatement {
        expression: Box<Node>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    EmptyStatement,
    DebuggerStatement,
    ReturnStatement {
        argument: Option<Box<Node>>,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },
    DoWhileStatement {
        body: Box<Node>,
        test: Box<Node>,
    },
    ForStatement {
        init: Option<Box<Node>>,
        test: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    ForInStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },
    ForOfStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },
    BreakStatement {
        label: Option<String>,
    },
    ContinueStatement {
        label: Option<String>,
    },
    ThrowStatement {
        argument: Box<Node>,
    },
    TryStatement {
        block: Box<Node>,
        handler: Option<Box<Node>>,
        finalizer: Option<Box<Node>>,
    },
    CatchClause {
        param: Option<Box<Node>>,
        body: Box<Node>,
    },
    SwitchStatement {
        discriminant: Box<Node>,
        cases: Vec<Node>,
    },
    SwitchCase {
        /// `None` for `default:`.
        test: Option<Box<Node>>,
        consequent: Vec<Node>,
    },
    LabeledStatement {
        label: String,
        body: Box<Node>,
    },

    // =========================================================================
    // Declarations
    // =========================================================================
    VariableDeclaration {
        kind: VariableKind,
        declarations: Vec<Node>,
    },
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },
    FunctionDeclaration(Function),
    ClassDeclaration(Class),

    // =========================================================================
    // Expressions
    // =========================================================================
    Identifier {
        name: String,
    },
    Literal {
        kind: LiteralKind,
        /// Exact source spelling, quotes included for strings.
        raw: String,
    },
    TemplateLiteral {
        /// Raw text of each chunk, without delimiters.
        quasis: Vec<String>,
        expressions: Vec<Node>,
    },
    TaggedTemplateExpression {
        tag: Box<Node>,
        quasi: Box<Node>,
    },
    ThisExpression,
    Super,
    ArrayExpression {
        /// `None` is an elision hole.
        elements: Vec<Option<Node>>,
    },
    ObjectExpression {
        properties: Vec<Node>,
    },
    Property {
        key: Box<Node>,
        value: Box<Node>,
        kind: PropertyKind,
        computed: bool,
        shorthand: bool,
        method: bool,
    },
    FunctionExpression(Function),
    ArrowFunctionExpression {
        params: Vec<Node>,
        /// A `BlockStatement`, or an expression when `expression` is set.
        body: Box<Node>,
        expression: bool,
        is_async: bool,
    },
    ClassExpression(Class),
    MethodDefinition {
        key: Box<Node>,
        /// Always a `FunctionExpression`.
        value: Box<Node>,
        kind: MethodKind,
        computed: bool,
        is_static: bool,
    },
    UnaryExpression {
        operator: UnaryOperator,
        argument: Box<Node>,
    },
    UpdateExpression {
        operator: UpdateOperator,
        prefix: bool,
        argument: Box<Node>,
    },
    BinaryExpression {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    LogicalExpression {
        operator: LogicalOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    AssignmentExpression {
        operator: AssignmentOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
        optional: bool,
    },
    NewExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        /// An `Identifier` unless `computed`.
        property: Box<Node>,
        computed: bool,
        optional: bool,
    },
    SequenceExpression {
        expressions: Vec<Node>,
    },
    SpreadElement {
        argument: Box<Node>,
    },
    YieldExpression {
        argument: Option<Box<Node>>,
        delegate: bool,
    },
    AwaitExpression {
        argument: Box<Node>,
    },

    // =========================================================================
    // Patterns
    // =========================================================================
    ObjectPattern {
        /// `Property` nodes whose values are patterns, and `RestElement`.
        properties: Vec<Node>,
    },
    ArrayPattern {
        elements: Vec<Option<Node>>,
    },
    AssignmentPattern {
        left: Box<Node>,
        right: Box<Node>,
    },
    RestElement {
        argument: Box<Node>,
    },
}

/// Fieldless discriminant of [`Node`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    DebuggerStatement,
    ReturnStatement,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    SwitchStatement,
    SwitchCase,
    LabeledStatement,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    ClassDeclaration,
    Identifier,
    Literal,
    TemplateLiteral,
    TaggedTemplateExpression,
    ThisExpression,
    Super,
    ArrayExpression,
    ObjectExpression,
    Property,
    FunctionExpression,
    ArrowFunctionExpression,
    ClassExpression,
    MethodDefinition,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    SequenceExpression,
    SpreadElement,
    YieldExpression,
    AwaitExpression,
    ObjectPattern,
    ArrayPattern,
    AssignmentPattern,
    RestElement,
}

impl NodeKind {
    /// Function or arrow function expression.
    #[must_use]
    pub const fn is_function_expression(self) -> bool {
        matches!(self, Self::FunctionExpression | Self::ArrowFunctionExpression)
    }
}

impl Node {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program { .. } => NodeKind::Program,
            Self::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            Self::BlockStatement { .. } => NodeKind::BlockStatement,
            Self::EmptyStatement => NodeKind::EmptyStatement,
            Self::DebuggerStatement => NodeKind::DebuggerStatement,
            Self::ReturnStatement { .. } => NodeKind::ReturnStatement,
            Self::IfStatement { .. } => NodeKind::IfStatement,
            Self::WhileStatement { .. } => NodeKind::WhileStatement,
            Self::DoWhileStatement { .. } => NodeKind::DoWhileStatement,
            Self::ForStatement { .. } => NodeKind::ForStatement,
            Self::ForInStatement { .. } => NodeKind::ForInStatement,
            Self::ForOfStatement { .. } => NodeKind::ForOfStatement,
            Self::BreakStatement { .. } => NodeKind::BreakStatement,
            Self::ContinueStatement { .. } => NodeKind::ContinueStatement,
            Self::ThrowStatement { .. } => NodeKind::ThrowStatement,
            Self::TryStatement { .. } => NodeKind::TryStatement,
            Self::CatchClause { .. } => NodeKind::CatchClause,
            Self::SwitchStatement { .. } => NodeKind::SwitchStatement,
            Self::SwitchCase { .. } => NodeKind::SwitchCase,
            Self::LabeledStatement { .. } => NodeKind::LabeledStatement,
            Self::VariableDeclaration { .. } => NodeKind::VariableDeclaration,
            Self::VariableDeclarator { .. } => NodeKind::VariableDeclarator,
            Self::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Self::ClassDeclaration(_) => NodeKind::ClassDeclaration,
            Self::Identifier { .. } => NodeKind::Identifier,
            Self::Literal { .. } => NodeKind::Literal,
            Self::TemplateLiteral { .. } => NodeKind::TemplateLiteral,
            Self::TaggedTemplateExpression { .. } => NodeKind::TaggedTemplateExpression,
            Self::ThisExpression => NodeKind::ThisExpression,
            Self::Super => NodeKind::Super,
            Self::ArrayExpression { .. } => NodeKind::ArrayExpression,
            Self::ObjectExpression { .. } => NodeKind::ObjectExpression,
            Self::Property { .. } => NodeKind::Property,
            Self::FunctionExpression(_) => NodeKind::FunctionExpression,
            Self::ArrowFunctionExpression { .. } => NodeKind::ArrowFunctionExpression,
            Self::ClassExpression(_) => NodeKind::ClassExpression,
            Self::MethodDefinition { .. } => NodeKind::MethodDefinition,
            Self::UnaryExpression { .. } => NodeKind::UnaryExpression,
            Self::UpdateExpression { .. } => NodeKind::UpdateExpression,
            Self::BinaryExpression { .. } => NodeKind::BinaryExpression,
            Self::LogicalExpression { .. } => NodeKind::LogicalExpression,
            Self::AssignmentExpression { .. } => NodeKind::AssignmentExpression,
            Self::ConditionalExpression { .. } => NodeKind::ConditionalExpression,
            Self::CallExpression { .. } => NodeKind::CallExpression,
            Self::NewExpression { .. } => NodeKind::NewExpression,
            Self::MemberExpression { .. } => NodeKind::MemberExpression,
            Self::SequenceExpression { .. } => NodeKind::SequenceExpression,
            Self::SpreadElement { .. } => NodeKind::SpreadElement,
            Self::YieldExpression { .. } => NodeKind::YieldExpression,
            Self::AwaitExpression { .. } => NodeKind::AwaitExpression,
            Self::ObjectPattern { .. } => NodeKind::ObjectPattern,
            Self::ArrayPattern { .. } => NodeKind::ArrayPattern,
            Self::AssignmentPattern { .. } => NodeKind::AssignmentPattern,
            Self::RestElement { .. } => NodeKind::RestElement,
        }
    }

    /// Name of a plain identifier node.
    #[must_use]
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Self::Identifier { name } => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_function_expression(&self) -> bool {
        self.kind().is_function_expression()
    }

    // =========================================================================
    // Builder helpers
    // =========================================================================

    /// Create an identifier node
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Create a numeric literal from its source spelling
    pub fn number(raw: impl Into<String>) -> Self {
        Self::Literal {
            kind: LiteralKind::Number,
            raw: raw.into(),
        }
    }

    /// Create a non-computed member access: `object.property`
    pub fn member(object: Self, property: impl Into<String>) -> Self {
        Self::MemberExpression {
            object: Box::new(object),
            property: Box::new(Self::ident(property)),
            computed: false,
            optional: false,
        }
    }

    /// Create a call expression: `callee(args)`
    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::CallExpression {
            callee: Box::new(callee),
            arguments,
            optional: false,
        }
    }

    /// Create a new expression: `new callee(args)`
    pub fn new_expr(callee: Self, arguments: Vec<Self>) -> Self {
        Self::NewExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Create a binary expression
    pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
        Self::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an expression statement
    pub fn expr_stmt(expression: Self) -> Self {
        Self::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    /// Create a single-declarator variable declaration
    pub fn var_decl(kind: VariableKind, name: impl Into<String>, init: Option<Self>) -> Self {
        Self::VariableDeclaration {
            kind,
            declarations: vec![Self::VariableDeclarator {
                id: Box::new(Self::ident(name)),
                init: init.map(Box::new),
            }],
        }
    }

    // =========================================================================
    // Child access (declared order)
    // =========================================================================

    /// Direct children in their fixed declared order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        match self {
            Self::Program { body }
            | Self::BlockStatement { body } => out.extend(body.iter()),
            Self::ExpressionStatement { expression } => out.push(&**expression),
            Self::EmptyStatement
            | Self::DebuggerStatement
            | Self::BreakStatement { .. }
            | Self::ContinueStatement { .. }
            | Self::Identifier { .. }
            | Self::Literal { .. }
            | Self::ThisExpression
            | Self::Super => {}
            Self::ReturnStatement { argument } => out.extend(argument.as_deref()),
            Self::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                out.push(&**test);
                out.push(&**consequent);
                out.extend(alternate.as_deref());
            }
            Self::WhileStatement { test, body } => {
                out.push(&**test);
                out.push(&**body);
            }
            Self::DoWhileStatement { body, test } => {
                out.push(&**body);
                out.push(&**test);
            }
            Self::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                out.extend(init.as_deref());
                out.extend(test.as_deref());
                out.extend(update.as_deref());
                out.push(&**body);
            }
            Self::ForInStatement { left, right, body }
            | Self::ForOfStatement { left, right, body } => {
                out.push(&**left);
                out.push(&**right);
                out.push(&**body);
            }
            Self::ThrowStatement { argument }
            | Self::SpreadElement { argument }
            | Self::AwaitExpression { argument }
            | Self::RestElement { argument }
            | Self::UnaryExpression { argument, .. }
            | Self::UpdateExpression { argument, .. } => out.push(&**argument),
            Self::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                out.push(&**block);
                out.extend(handler.as_deref());
                out.extend(finalizer.as_deref());
            }
            Self::CatchClause { param, body } => {
                out.extend(param.as_deref());
                out.push(&**body);
            }
            Self::SwitchStatement {
                discriminant,
                cases,
            } => {
                out.push(&**discriminant);
                out.extend(cases.iter());
            }
            Self::SwitchCase { test, consequent } => {
                out.extend(test.as_deref());
                out.extend(consequent.iter());
            }
            Self::LabeledStatement { body, .. } => out.push(&**body),
            Self::VariableDeclaration { declarations, .. } => out.extend(declarations.iter()),
            Self::VariableDeclarator { id, init } => {
                out.push(&**id);
                out.extend(init.as_deref());
            }
            Self::FunctionDeclaration(function) | Self::FunctionExpression(function) => {
                out.extend(function.params.iter());
                out.push(&*function.body);
            }
            Self::ClassDeclaration(class) | Self::ClassExpression(class) => {
                out.extend(class.super_class.as_deref());
                out.extend(class.body.iter());
            }
            Self::TemplateLiteral { expressions, .. } => out.extend(expressions.iter()),
            Self::TaggedTemplateExpression { tag, quasi } => {
                out.push(&**tag);
                out.push(&**quasi);
            }
            Self::ArrayExpression { elements } | Self::ArrayPattern { elements } => {
                out.extend(elements.iter().flatten());
            }
            Self::ObjectExpression { properties } | Self::ObjectPattern { properties } => {
                out.extend(properties.iter());
            }
            Self::Property { key, value, .. } | Self::MethodDefinition { key, value, .. } => {
                out.push(&**key);
                out.push(&**value);
            }
            Self::ArrowFunctionExpression { params, body, .. } => {
                out.extend(params.iter());
                out.push(&**body);
            }
            Self::BinaryExpression { left, right, .. }
            | Self::LogicalExpression { left, right, .. }
            | Self::AssignmentExpression { left, right, .. }
            | Self::AssignmentPattern { left, right } => {
                out.push(&**left);
                out.push(&**right);
            }
            Self::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                out.push(&**test);
                out.push(&**consequent);
                out.push(&**alternate);
            }
            Self::CallExpression {
                callee, arguments, ..
            }
            | Self::NewExpression { callee, arguments } => {
                out.push(&**callee);
                out.extend(arguments.iter());
            }
            Self::MemberExpression {
                object, property, ..
            } => {
                out.push(&**object);
                out.push(&**property);
            }
            Self::SequenceExpression { expressions } => out.extend(expressions.iter()),
            Self::YieldExpression { argument, .. } => out.extend(argument.as_deref()),
        }
        out
    }

    /// Mutable direct children in their fixed declared order.
    pub fn children_mut(&mut self) -> Vec<&mut Self> {
        let mut out = Vec::new();
        match self {
            Self::Program { body }
            | Self::BlockStatement { body } => out.extend(body.iter_mut()),
            Self::ExpressionStatement { expression } => out.push(&mut **expression),
            Self::EmptyStatement
            | Self::DebuggerStatement
            | Self::BreakStatement { .. }
            | Self::ContinueStatement { .. }
            | Self::Identifier { .. }
            | Self::Literal { .. }
            | Self::ThisExpression
            | Self::Super => {}
            Self::ReturnStatement { argument } => out.extend(argument.as_deref_mut()),
            Self::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                out.push(&mut **test);
                out.push(&mut **consequent);
                out.extend(alternate.as_deref_mut());
            }
            Self::WhileStatement { test, body } => {
                out.push(&mut **test);
                out.push(&mut **body);
            }
            Self::DoWhileStatement { body, test } => {
                out.push(&mut **body);
                out.push(&mut **test);
            }
            Self::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                out.extend(init.as_deref_mut());
                out.extend(test.as_deref_mut());
                out.extend(update.as_deref_mut());
                out.push(&mut **body);
            }
            Self::ForInStatement { left, right, body }
            | Self::ForOfStatement { left, right, body } => {
                out.push(&mut **left);
                out.push(&mut **right);
                out.push(&mut **body);
            }
            Self::ThrowStatement { argument }
            | Self::SpreadElement { argument }
            | Self::AwaitExpression { argument }
            | Self::RestElement { argument }
            | Self::UnaryExpression { argument, .. }
            | Self::UpdateExpression { argument, .. } => out.push(&mut **argument),
            Self::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                out.push(&mut **block);
                out.extend(handler.as_deref_mut());
                out.extend(finalizer.as_deref_mut());
            }
            Self::CatchClause { param, body } => {
                out.extend(param.as_deref_mut());
                out.push(&mut **body);
            }
            Self::SwitchStatement {
                discriminant,
                cases,
            } => {
                out.push(&mut **discriminant);
                out.extend(cases.iter_mut());
            }
            Self::SwitchCase { test, consequent } => {
                out.extend(test.as_deref_mut());
                out.extend(consequent.iter_mut());
            }
            Self::LabeledStatement { body, .. } => out.push(&mut **body),
            Self::VariableDeclaration { declarations, .. } => {
                out.extend(declarations.iter_mut());
            }
            Self::VariableDeclarator { id, init } => {
                out.push(&mut **id);
                out.extend(init.as_deref_mut());
            }
            Self::FunctionDeclaration(function) | Self::FunctionExpression(function) => {
                out.extend(function.params.iter_mut());
                out.push(&mut *function.body);
            }
            Self::ClassDeclaration(class) | Self::ClassExpression(class) => {
                out.extend(class.super_class.as_deref_mut());
                out.extend(class.body.iter_mut());
            }
            Self::TemplateLiteral { expressions, .. } => out.extend(expressions.iter_mut()),
            Self::TaggedTemplateExpression { tag, quasi } => {
                out.push(&mut **tag);
                out.push(&mut **quasi);
            }
            Self::ArrayExpression { elements } | Self::ArrayPattern { elements } => {
                out.extend(elements.iter_mut().flatten());
            }
            Self::ObjectExpression { properties } | Self::ObjectPattern { properties } => {
                out.extend(properties.iter_mut());
            }
            Self::Property { key, value, .. } | Self::MethodDefinition { key, value, .. } => {
                out.push(&mut **key);
                out.push(&mut **value);
            }
            Self::ArrowFunctionExpression { params, body, .. } => {
                out.extend(params.iter_mut());
                out.push(&mut **body);
            }
            Self::BinaryExpression { left, right, .. }
            | Self::LogicalExpression { left, right, .. }
            | Self::AssignmentExpression { left, right, .. }
            | Self::AssignmentPattern { left, right } => {
                out.push(&mut **left);
                out.push(&mut **right);
            }
            Self::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                out.push(&mut **test);
                out.push(&mut **consequent);
                out.push(&mut **alternate);
            }
            Self::CallExpression {
                callee, arguments, ..
            }
            | Self::NewExpression { callee, arguments } => {
                out.push(&mut **callee);
                out.extend(arguments.iter_mut());
            }
            Self::MemberExpression {
                object, property, ..
            } => {
                out.push(&mut **object);
                out.push(&mut **property);
            }
            Self::SequenceExpression { expressions } => out.extend(expressions.iter_mut()),
            Self::YieldExpression { argument, .. } => out.extend(argument.as_deref_mut()),
        }
        out
    }
}
