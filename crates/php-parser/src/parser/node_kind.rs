use std::fmt;

/// The kind of a node in the parse tree.
///
/// `Token` marks a shifted terminal that no reduction re-typed; every other
/// kind is a nonterminal construct. The catalog is stable public ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A terminal leaf; the underlying token is addressed by the node's
    /// token range.
    Token,
    ArrayLiteral,
    ArrayValue,
    ArrayValueList,
    AssignmentList,
    BackticksExpression,
    BinaryExpression,
    Break,
    CallParameterList,
    Case,
    Cast,
    CastExpression,
    Catch,
    CatchList,
    ClassAttributes,
    ClassConstantDeclaration,
    ClassConstantDeclarationList,
    ClassDeclaration,
    ClassMemberDeclaration,
    ClassMemberDeclarationList,
    ClassMemberModifierList,
    ClassName,
    ClassStaticAccess,
    CloseTag,
    ConcatenationList,
    ConditionList,
    ConstantDeclaration,
    ConstantDeclarationList,
    Continue,
    ControlCondition,
    DeclarationParameter,
    DeclarationParameterList,
    DeclarationReturn,
    Declare,
    DeclareDeclaration,
    DeclareDeclarationList,
    Default,
    DoWhile,
    EchoList,
    Else,
    Elseif,
    Empty,
    ExpressionList,
    ExtendsList,
    Finally,
    For,
    Foreach,
    ForeachExpression,
    ForExpression,
    FunctionCall,
    FunctionDeclaration,
    FunctionModifierList,
    GlobalDeclarationList,
    Goto,
    HaltCompiler,
    Heredoc,
    If,
    ImplementsList,
    IncludeFile,
    IndexAccess,
    InlineHtml,
    InterfaceDeclaration,
    Label,
    LexicalVariableList,
    List,
    MagicScalar,
    MethodCall,
    MethodDeclaration,
    MethodModifierList,
    Namespace,
    New,
    NullableType,
    NumericScalar,
    ObjectPropertyAccess,
    OpenTag,
    Operator,
    ParentheticalExpression,
    Program,
    Reference,
    Return,
    Statement,
    StatementList,
    StaticDeclaration,
    StaticDeclarationList,
    String,
    StringScalar,
    Switch,
    SymbolName,
    TernaryExpression,
    Throw,
    TraitAdaptationList,
    TraitAs,
    TraitInsteadof,
    TraitMethodReference,
    TraitReferenceList,
    TraitUse,
    TraitUseList,
    Try,
    TypeName,
    UnaryPostfixExpression,
    UnaryPrefixExpression,
    Unpack,
    UnsetList,
    Use,
    UseList,
    Variable,
    VariableExpression,
    VariableReference,
    VariableVariable,
    While,
    Yield,
}

impl NodeKind {
    /// The canonical name of this node kind, e.g. `n_CONCATENATION_LIST`.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Token => "n_TOKEN",
            NodeKind::ArrayLiteral => "n_ARRAY_LITERAL",
            NodeKind::ArrayValue => "n_ARRAY_VALUE",
            NodeKind::ArrayValueList => "n_ARRAY_VALUE_LIST",
            NodeKind::AssignmentList => "n_ASSIGNMENT_LIST",
            NodeKind::BackticksExpression => "n_BACKTICKS_EXPRESSION",
            NodeKind::BinaryExpression => "n_BINARY_EXPRESSION",
            NodeKind::Break => "n_BREAK",
            NodeKind::CallParameterList => "n_CALL_PARAMETER_LIST",
            NodeKind::Case => "n_CASE",
            NodeKind::Cast => "n_CAST",
            NodeKind::CastExpression => "n_CAST_EXPRESSION",
            NodeKind::Catch => "n_CATCH",
            NodeKind::CatchList => "n_CATCH_LIST",
            NodeKind::ClassAttributes => "n_CLASS_ATTRIBUTES",
            NodeKind::ClassConstantDeclaration => "n_CLASS_CONSTANT_DECLARATION",
            NodeKind::ClassConstantDeclarationList => "n_CLASS_CONSTANT_DECLARATION_LIST",
            NodeKind::ClassDeclaration => "n_CLASS_DECLARATION",
            NodeKind::ClassMemberDeclaration => "n_CLASS_MEMBER_DECLARATION",
            NodeKind::ClassMemberDeclarationList => "n_CLASS_MEMBER_DECLARATION_LIST",
            NodeKind::ClassMemberModifierList => "n_CLASS_MEMBER_MODIFIER_LIST",
            NodeKind::ClassName => "n_CLASS_NAME",
            NodeKind::ClassStaticAccess => "n_CLASS_STATIC_ACCESS",
            NodeKind::CloseTag => "n_CLOSE_TAG",
            NodeKind::ConcatenationList => "n_CONCATENATION_LIST",
            NodeKind::ConditionList => "n_CONDITION_LIST",
            NodeKind::ConstantDeclaration => "n_CONSTANT_DECLARATION",
            NodeKind::ConstantDeclarationList => "n_CONSTANT_DECLARATION_LIST",
            NodeKind::Continue => "n_CONTINUE",
            NodeKind::ControlCondition => "n_CONTROL_CONDITION",
            NodeKind::DeclarationParameter => "n_DECLARATION_PARAMETER",
            NodeKind::DeclarationParameterList => "n_DECLARATION_PARAMETER_LIST",
            NodeKind::DeclarationReturn => "n_DECLARATION_RETURN",
            NodeKind::Declare => "n_DECLARE",
            NodeKind::DeclareDeclaration => "n_DECLARE_DECLARATION",
            NodeKind::DeclareDeclarationList => "n_DECLARE_DECLARATION_LIST",
            NodeKind::Default => "n_DEFAULT",
            NodeKind::DoWhile => "n_DO_WHILE",
            NodeKind::EchoList => "n_ECHO_LIST",
            NodeKind::Else => "n_ELSE",
            NodeKind::Elseif => "n_ELSEIF",
            NodeKind::Empty => "n_EMPTY",
            NodeKind::ExpressionList => "n_EXPRESSION_LIST",
            NodeKind::ExtendsList => "n_EXTENDS_LIST",
            NodeKind::Finally => "n_FINALLY",
            NodeKind::For => "n_FOR",
            NodeKind::Foreach => "n_FOREACH",
            NodeKind::ForeachExpression => "n_FOREACH_EXPRESSION",
            NodeKind::ForExpression => "n_FOR_EXPRESSION",
            NodeKind::FunctionCall => "n_FUNCTION_CALL",
            NodeKind::FunctionDeclaration => "n_FUNCTION_DECLARATION",
            NodeKind::FunctionModifierList => "n_FUNCTION_MODIFIER_LIST",
            NodeKind::GlobalDeclarationList => "n_GLOBAL_DECLARATION_LIST",
            NodeKind::Goto => "n_GOTO",
            NodeKind::HaltCompiler => "n_HALT_COMPILER",
            NodeKind::Heredoc => "n_HEREDOC",
            NodeKind::If => "n_IF",
            NodeKind::ImplementsList => "n_IMPLEMENTS_LIST",
            NodeKind::IncludeFile => "n_INCLUDE_FILE",
            NodeKind::IndexAccess => "n_INDEX_ACCESS",
            NodeKind::InlineHtml => "n_INLINE_HTML",
            NodeKind::InterfaceDeclaration => "n_INTERFACE_DECLARATION",
            NodeKind::Label => "n_LABEL",
            NodeKind::LexicalVariableList => "n_LEXICAL_VARIABLE_LIST",
            NodeKind::List => "n_LIST",
            NodeKind::MagicScalar => "n_MAGIC_SCALAR",
            NodeKind::MethodCall => "n_METHOD_CALL",
            NodeKind::MethodDeclaration => "n_METHOD_DECLARATION",
            NodeKind::MethodModifierList => "n_METHOD_MODIFIER_LIST",
            NodeKind::Namespace => "n_NAMESPACE",
            NodeKind::New => "n_NEW",
            NodeKind::NullableType => "n_NULLABLE_TYPE",
            NodeKind::NumericScalar => "n_NUMERIC_SCALAR",
            NodeKind::ObjectPropertyAccess => "n_OBJECT_PROPERTY_ACCESS",
            NodeKind::OpenTag => "n_OPEN_TAG",
            NodeKind::Operator => "n_OPERATOR",
            NodeKind::ParentheticalExpression => "n_PARENTHETICAL_EXPRESSION",
            NodeKind::Program => "n_PROGRAM",
            NodeKind::Reference => "n_REFERENCE",
            NodeKind::Return => "n_RETURN",
            NodeKind::Statement => "n_STATEMENT",
            NodeKind::StatementList => "n_STATEMENT_LIST",
            NodeKind::StaticDeclaration => "n_STATIC_DECLARATION",
            NodeKind::StaticDeclarationList => "n_STATIC_DECLARATION_LIST",
            NodeKind::String => "n_STRING",
            NodeKind::StringScalar => "n_STRING_SCALAR",
            NodeKind::Switch => "n_SWITCH",
            NodeKind::SymbolName => "n_SYMBOL_NAME",
            NodeKind::TernaryExpression => "n_TERNARY_EXPRESSION",
            NodeKind::Throw => "n_THROW",
            NodeKind::TraitAdaptationList => "n_TRAIT_ADAPTATION_LIST",
            NodeKind::TraitAs => "n_TRAIT_AS",
            NodeKind::TraitInsteadof => "n_TRAIT_INSTEADOF",
            NodeKind::TraitMethodReference => "n_TRAIT_METHOD_REFERENCE",
            NodeKind::TraitReferenceList => "n_TRAIT_REFERENCE_LIST",
            NodeKind::TraitUse => "n_TRAIT_USE",
            NodeKind::TraitUseList => "n_TRAIT_USE_LIST",
            NodeKind::Try => "n_TRY",
            NodeKind::TypeName => "n_TYPE_NAME",
            NodeKind::UnaryPostfixExpression => "n_UNARY_POSTFIX_EXPRESSION",
            NodeKind::UnaryPrefixExpression => "n_UNARY_PREFIX_EXPRESSION",
            NodeKind::Unpack => "n_UNPACK",
            NodeKind::UnsetList => "n_UNSET_LIST",
            NodeKind::Use => "n_USE",
            NodeKind::UseList => "n_USE_LIST",
            NodeKind::Variable => "n_VARIABLE",
            NodeKind::VariableExpression => "n_VARIABLE_EXPRESSION",
            NodeKind::VariableReference => "n_VARIABLE_REFERENCE",
            NodeKind::VariableVariable => "n_VARIABLE_VARIABLE",
            NodeKind::While => "n_WHILE",
            NodeKind::Yield => "n_YIELD",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
