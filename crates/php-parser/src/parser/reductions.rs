//! One reduction action per grammar rule.
//!
//! Each arm consumes the value-stack slots that matched the rule's
//! right-hand side (`v`, in source order) and produces the node for the
//! left-hand side. Rules without an arm keep their first slot, the yacc
//! `$$ = $1` default. The productions are quoted above each arm.

use crate::parser::arena::NodeId;
use crate::parser::interpolation;
use crate::parser::NodeKind;
use crate::parser::ReduceCtx;

pub(crate) fn reduce(p: &mut ReduceCtx<'_, '_, '_>, rule: u16, v: &[NodeId]) -> NodeId {
    match rule {
        // start: top_statement_list
        2 => {
            let program = p.new_node(NodeKind::Program);
            p.append_child(program, v[0]);
            *p.root = Some(program);
            v[0]
        }

        // top_statement_list: top_statement_list top_statement
        // inner_statement_list: inner_statement_list inner_statement
        // catch_list: catch_list catch
        // class_statement_list: class_statement_list class_statement
        // non_empty_trait_adaptation_list: non_empty_trait_adaptation_list trait_adaptation_statement
        // non_empty_member_modifiers: non_empty_member_modifiers member_modifier
        // dynamic_class_name_variable_properties: dynamic_class_name_variable_properties dynamic_class_name_variable_property
        3 | 24 | 64 | 160 | 175 | 195 | 318 => {
            p.append_child(v[0], v[1]);
            v[0]
        }

        // top_statement_list: <empty>
        // inner_statement_list: <empty>
        // case_list: <empty>
        // class_statement_list: <empty>
        4 | 25 | 109 | 161 => p.new_node(NodeKind::StatementList),

        // namespace_name: T_STRING
        5 => {
            p.retype(v[0], NodeKind::SymbolName);
            v[0]
        }

        // namespace_name: namespace_name T_NS_SEPARATOR T_STRING
        6 => {
            p.expand(v[0], v[2]);
            v[0]
        }

        // top_statement: T_HALT_COMPILER '(' ')' ';'
        // inner_statement: T_HALT_COMPILER '(' ')' ';'
        10 | 29 => {
            p.set_span(v[0], NodeKind::HaltCompiler, v[2]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[3]);
            statement
        }

        // top_statement: T_NAMESPACE namespace_name ';'
        11 => {
            p.set_span(v[0], NodeKind::Namespace, v[1]);
            p.append_child(v[0], v[1]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[2]);
            statement
        }

        // top_statement: T_NAMESPACE namespace_name '{' top_statement_list '}'
        12 => {
            p.set_span(v[0], NodeKind::Namespace, v[4]);
            p.append_child(v[0], v[1]);
            p.enclose(v[2], v[3], v[4]);
            p.append_child(v[0], v[3]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // top_statement: T_NAMESPACE '{' top_statement_list '}'
        13 => {
            p.set_span(v[0], NodeKind::Namespace, v[3]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            p.expand(v[2], v[3]);
            p.expand(v[2], v[1]);
            p.append_child(v[0], v[2]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // top_statement: T_USE use_declarations ';'
        // unticked_statement: T_GLOBAL global_var_list ';'
        // unticked_statement: T_STATIC static_var_list ';'
        // unticked_statement: T_ECHO echo_expr_list ';'
        14 | 49 | 50 | 51 => {
            p.expand(v[1], v[0]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[1]);
            p.expand(statement, v[2]);
            statement
        }

        // top_statement: constant_declaration ';'
        // unticked_statement: expr ';'
        // unticked_statement: yield_expr ';'
        // class_statement: class_constant_declaration ';'
        15 | 53 | 54 | 163 => {
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[1]);
            statement
        }

        // use_declarations: use_declarations ',' use_declaration
        // unset_variables: unset_variables ',' unset_variable
        // interface_list: interface_list ',' fully_qualified_class_name
        // non_empty_function_call_parameter_list: non_empty_function_call_parameter_list ',' argument
        // global_var_list: global_var_list ',' global_var
        // trait_list: trait_list ',' fully_qualified_class_name
        // trait_reference_list: trait_reference_list ',' fully_qualified_class_name
        // echo_expr_list: echo_expr_list ',' expr
        // non_empty_for_expr: non_empty_for_expr ',' expr
        // assignment_list: assignment_list ',' assignment_list_element
        // isset_variables: isset_variables ',' variable
        16 | 71 | 92 | 147 | 151 | 169 | 180 | 209 | 213 | 408 | 431 => {
            p.append_child(v[0], v[2]);
            v[0]
        }

        // use_declarations: use_declaration
        17 => {
            let use_list = p.new_node(NodeKind::UseList);
            p.append_child(use_list, v[0]);
            use_list
        }

        // use_declaration: namespace_name
        18 => {
            let use_decl = p.new_node(NodeKind::Use);
            p.append_child(use_decl, v[0]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(use_decl, empty);
            use_decl
        }

        // use_declaration: namespace_name T_AS T_STRING
        19 => {
            let use_decl = p.new_node(NodeKind::Use);
            p.append_child(use_decl, v[0]);
            p.retype(v[2], NodeKind::String);
            p.append_child(use_decl, v[2]);
            use_decl
        }

        // use_declaration: T_NS_SEPARATOR namespace_name
        20 => {
            let use_decl = p.new_node(NodeKind::Use);
            p.expand(v[1], v[0]);
            p.append_child(use_decl, v[1]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(use_decl, empty);
            use_decl
        }

        // use_declaration: T_NS_SEPARATOR namespace_name T_AS T_STRING
        21 => {
            let use_decl = p.new_node(NodeKind::Use);
            p.expand(v[1], v[0]);
            p.append_child(use_decl, v[1]);
            p.retype(v[3], NodeKind::String);
            p.append_child(use_decl, v[3]);
            use_decl
        }

        // constant_declaration: constant_declaration ',' T_STRING '=' static_scalar
        22 => {
            p.expand(v[0], v[4]);
            let constant_declaration = p.new_node(NodeKind::ConstantDeclaration);
            p.retype(v[2], NodeKind::String);
            p.append_child(constant_declaration, v[2]);
            p.append_child(constant_declaration, v[4]);
            p.append_child(v[0], constant_declaration);
            v[0]
        }

        // constant_declaration: T_CONST T_STRING '=' static_scalar
        23 => {
            p.set_span(v[0], NodeKind::ConstantDeclarationList, v[3]);
            let constant_declaration = p.new_node(NodeKind::ConstantDeclaration);
            p.retype(v[1], NodeKind::String);
            p.append_child(constant_declaration, v[1]);
            p.append_child(constant_declaration, v[3]);
            p.append_child(v[0], constant_declaration);
            v[0]
        }

        // statement: T_STRING ':'
        31 => {
            p.retype(v[0], NodeKind::String);
            let label = p.new_node(NodeKind::Label);
            p.append_child(label, v[0]);
            p.expand(label, v[1]);
            label
        }

        // statement: T_OPEN_TAG
        // statement: T_OPEN_TAG_WITH_ECHO
        32 | 33 => {
            p.retype(v[0], NodeKind::OpenTag);
            v[0]
        }

        // statement: T_CLOSE_TAG
        34 => {
            p.retype(v[0], NodeKind::CloseTag);
            v[0]
        }

        // unticked_statement: '{' inner_statement_list '}'
        // switch_case_list: '{' case_list '}'
        // trait_adaptations: '{' trait_adaptation_list '}'
        // method_body: '{' inner_statement_list '}'
        // ctor_arguments: '(' function_call_parameter_list ')'
        // method: '(' function_call_parameter_list ')'
        // base_variable: '(' new_expr ')'
        // variable_name: '{' expr '}'
        // parenthesis_expr: '(' yield_expr ')'
        35 | 105 | 171 | 189 | 325 | 374 | 389 | 405 | 433 => {
            p.enclose(v[0], v[1], v[2]);
            v[1]
        }

        // unticked_statement: T_IF '(' expr ')' statement elseif_list else_single
        36 => {
            let condition_list = p.new_node(NodeKind::ConditionList);
            p.retype(v[0], NodeKind::If);
            p.set_span(v[1], NodeKind::ControlCondition, v[3]);
            p.append_child(v[1], v[2]);
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[4]);
            p.append_child(condition_list, v[0]);
            p.append_children(condition_list, v[5]);

            // Splice `if (x) ...; else if (y) ...;` chains into one flat condition
            // list instead of a right-leaning condition tree.
            let else_branch = v[6];
            let nested = if p.kind(else_branch) == NodeKind::Else {
                p.first_child(else_branch)
                    .and_then(|statement| p.first_child(statement))
                    .filter(|&list| p.kind(list) == NodeKind::ConditionList)
            } else {
                None
            };
            if let Some(list) = nested {
                let first = p.first_child(list).expect("condition list starts with an if");
                p.retype(first, NodeKind::Elseif);
                if let Some((else_token, _)) = p.token_range(else_branch) {
                    // The spliced branch starts at the `else` keyword.
                    p.expand_to(first, else_token);
                }
                p.append_children(condition_list, list);
            } else if p.kind(else_branch) != NodeKind::Empty {
                p.append_child(condition_list, else_branch);
            }

            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, condition_list);
            statement
        }

        // unticked_statement: T_IF '(' expr ')' ':' inner_statement_list new_elseif_list new_else_single T_ENDIF ';'
        37 => {
            let condition_list = p.new_node(NodeKind::ConditionList);
            p.retype(v[0], NodeKind::If);
            p.set_span(v[1], NodeKind::ControlCondition, v[3]);
            p.append_child(v[1], v[2]);
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[5]);
            p.append_child(condition_list, v[0]);
            p.append_children(condition_list, v[6]);
            p.append_child(condition_list, v[7]);
            p.expand(condition_list, v[8]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, condition_list);
            p.expand(statement, v[9]);
            statement
        }

        // unticked_statement: T_WHILE '(' expr ')' while_statement
        38 => {
            p.retype(v[0], NodeKind::While);
            p.set_span(v[1], NodeKind::ControlCondition, v[3]);
            p.append_child(v[1], v[2]);
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[4]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_statement: T_DO statement T_WHILE '(' expr ')' ';'
        39 => {
            p.retype(v[0], NodeKind::DoWhile);
            p.append_child(v[0], v[1]);
            p.set_span(v[3], NodeKind::ControlCondition, v[5]);
            p.append_child(v[3], v[4]);
            p.append_child(v[0], v[3]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[6]);
            statement
        }

        // unticked_statement: T_FOR '(' for_expr ';' for_expr ';' for_expr ')' for_statement
        40 => {
            p.retype(v[0], NodeKind::For);
            p.set_span(v[1], NodeKind::ForExpression, v[7]);
            p.append_child(v[1], v[2]);
            p.append_child(v[1], v[4]);
            p.append_child(v[1], v[6]);
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[8]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_statement: T_SWITCH '(' expr ')' switch_case_list
        41 => {
            p.retype(v[0], NodeKind::Switch);
            p.set_span(v[1], NodeKind::ControlCondition, v[3]);
            p.append_child(v[1], v[2]);
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[4]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_statement: T_BREAK ';'
        42 => {
            p.retype(v[0], NodeKind::Break);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[1]);
            statement
        }

        // unticked_statement: T_BREAK expr ';'
        43 => {
            p.retype(v[0], NodeKind::Break);
            p.append_child(v[0], v[1]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[2]);
            statement
        }

        // unticked_statement: T_CONTINUE ';'
        44 => {
            p.retype(v[0], NodeKind::Continue);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[1]);
            statement
        }

        // unticked_statement: T_CONTINUE expr ';'
        45 => {
            p.retype(v[0], NodeKind::Continue);
            p.append_child(v[0], v[1]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[2]);
            statement
        }

        // unticked_statement: T_RETURN ';'
        46 => {
            p.retype(v[0], NodeKind::Return);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[1]);
            statement
        }

        // unticked_statement: T_RETURN expr_without_variable ';'
        // unticked_statement: T_RETURN variable ';'
        47 | 48 => {
            p.retype(v[0], NodeKind::Return);
            p.append_child(v[0], v[1]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[2]);
            statement
        }

        // unticked_statement: T_INLINE_HTML
        52 => {
            p.retype(v[0], NodeKind::InlineHtml);
            v[0]
        }

        // unticked_statement: T_UNSET '(' unset_variables ')' ';'
        55 => {
            p.expand(v[2], v[3]);
            p.expand(v[2], v[0]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[2]);
            p.expand(statement, v[4]);
            statement
        }

        // unticked_statement: T_FOREACH '(' variable T_AS foreach_variable foreach_optional_arg ')' foreach_statement
        // unticked_statement: T_FOREACH '(' expr_without_variable T_AS variable foreach_optional_arg ')' foreach_statement
        56 | 57 => {
            p.retype(v[0], NodeKind::Foreach);
            p.set_span(v[1], NodeKind::ForeachExpression, v[6]);
            p.append_child(v[1], v[2]);
            if p.kind(v[5]) == NodeKind::Empty {
                p.append_child(v[1], v[5]);
                p.append_child(v[1], v[4]);
            } else {
                p.append_child(v[1], v[4]);
                p.append_child(v[1], v[5]);
            }
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[7]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_statement: T_DECLARE '(' declare_list ')' declare_statement
        58 => {
            p.retype(v[0], NodeKind::Declare);
            p.append_child(v[0], v[2]);
            p.append_child(v[0], v[4]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_statement: ';'
        59 => {
            let statement = p.new_node(NodeKind::Statement);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(statement, empty);
            p.expand(statement, v[0]);
            statement
        }

        // unticked_statement: T_TRY '{' inner_statement_list '}' catch_list finally_statement
        60 => {
            p.retype(v[0], NodeKind::Try);
            p.enclose(v[1], v[2], v[3]);
            p.append_child(v[0], v[2]);
            p.append_child(v[0], v[4]);
            p.append_child(v[0], v[5]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_statement: T_TRY '{' inner_statement_list '}' non_empty_finally_statement
        61 => {
            p.retype(v[0], NodeKind::Try);
            p.enclose(v[1], v[2], v[3]);
            p.append_child(v[0], v[2]);
            let catch_list = p.new_node(NodeKind::CatchList);
            p.append_child(v[0], catch_list);
            p.append_child(v[0], v[4]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_statement: T_THROW expr ';'
        62 => {
            p.retype(v[0], NodeKind::Throw);
            p.append_child(v[0], v[1]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[2]);
            statement
        }

        // unticked_statement: T_GOTO T_STRING ';'
        63 => {
            p.retype(v[0], NodeKind::Goto);
            p.retype(v[1], NodeKind::String);
            p.append_child(v[0], v[1]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            p.expand(statement, v[2]);
            statement
        }

        // catch_list: catch
        65 => {
            let catch_list = p.new_node(NodeKind::CatchList);
            p.append_child(catch_list, v[0]);
            catch_list
        }

        // catch: T_CATCH '(' fully_qualified_class_name T_VARIABLE ')' '{' inner_statement_list '}'
        66 => {
            p.retype(v[0], NodeKind::Catch);
            p.append_child(v[0], v[2]);
            p.retype(v[3], NodeKind::Variable);
            p.append_child(v[0], v[3]);
            p.enclose(v[5], v[6], v[7]);
            p.append_child(v[0], v[6]);
            p.expand(v[0], v[7]);
            v[0]
        }

        // finally_statement: <empty>
        // is_reference: <empty>
        // extends_from: <empty>
        // interface_extends_list: <empty>
        // implements_list: <empty>
        // foreach_optional_arg: <empty>
        // else_single: <empty>
        // new_else_single: <empty>
        // optional_type: <empty>
        // return_type: <empty>
        // @1: <empty>
        // trait_adaptations: ';'
        // trait_modifiers: <empty>
        // method_body: ';'
        // for_expr: <empty>
        // lexical_vars: <empty>
        // dynamic_class_name_variable_properties: <empty>
        // exit_expr: <empty>
        // ctor_arguments: <empty>
        // possible_comma: <empty>
        // variable_properties: <empty>
        // method_or_not: <empty>
        // dim_offset: <empty>
        // assignment_list_element: <empty>
        67 | 75 | 84 | 87 | 89 | 93 | 120 | 122 | 136 | 142 | 165 | 170 | 186 | 188 | 211 | 293 | 319 | 321 | 324 | 356 | 370 | 377 | 397 | 412 => p.new_node(NodeKind::Empty),

        // non_empty_finally_statement: T_FINALLY '{' inner_statement_list '}'
        69 => {
            p.retype(v[0], NodeKind::Finally);
            p.append_child(v[0], v[2]);
            p.expand(v[0], v[3]);
            v[0]
        }

        // unset_variables: unset_variable
        70 => {
            let unset_list = p.new_node(NodeKind::UnsetList);
            p.append_child(unset_list, v[0]);
            unset_list
        }

        // is_reference: '&'
        76 => {
            p.retype(v[0], NodeKind::Reference);
            v[0]
        }

        // unticked_function_declaration_statement: function is_reference T_STRING '(' parameter_list ')' return_type '{' inner_statement_list '}'
        77 => {
            p.set_span(v[0], NodeKind::FunctionDeclaration, v[8]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            p.append_child(v[0], v[1]);
            p.retype(v[2], NodeKind::String);
            p.append_child(v[0], v[2]);
            p.enclose(v[3], v[4], v[5]);
            p.append_child(v[0], v[4]);
            let empty2 = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty2);
            p.append_child(v[0], v[6]);
            p.enclose(v[7], v[8], v[9]);
            p.append_child(v[0], v[8]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, v[0]);
            statement
        }

        // unticked_class_declaration_statement: class_entry_type T_STRING extends_from implements_list '{' class_statement_list '}'
        78 => {
            let class_declaration = p.new_node(NodeKind::ClassDeclaration);
            p.append_child(class_declaration, v[0]);
            p.retype(v[1], NodeKind::ClassName);
            p.append_child(class_declaration, v[1]);
            p.append_child(class_declaration, v[2]);
            p.append_child(class_declaration, v[3]);
            p.enclose(v[4], v[5], v[6]);
            p.append_child(class_declaration, v[5]);
            p.expand(class_declaration, v[6]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, class_declaration);
            statement
        }

        // unticked_class_declaration_statement: interface_entry T_STRING interface_extends_list '{' class_statement_list '}'
        79 => {
            let interface_declaration = p.new_node(NodeKind::InterfaceDeclaration);
            let class_attributes = p.new_node(NodeKind::ClassAttributes);
            p.append_child(interface_declaration, class_attributes);
            p.expand(interface_declaration, v[0]);
            p.retype(v[1], NodeKind::ClassName);
            p.append_child(interface_declaration, v[1]);
            p.append_child(interface_declaration, v[2]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(interface_declaration, empty);
            p.enclose(v[3], v[4], v[5]);
            p.append_child(interface_declaration, v[4]);
            p.expand(interface_declaration, v[5]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, interface_declaration);
            statement
        }

        // class_entry_type: T_CLASS
        80 => {
            p.retype(v[0], NodeKind::ClassAttributes);
            v[0]
        }

        // class_entry_type: T_ABSTRACT T_CLASS
        // class_entry_type: T_FINAL T_CLASS
        81 | 82 => {
            p.retype(v[1], NodeKind::ClassAttributes);
            p.expand(v[1], v[0]);
            p.retype(v[0], NodeKind::String);
            p.append_child(v[1], v[0]);
            v[1]
        }

        // class_entry_type: T_TRAIT
        83 => {
            let class_attributes = p.new_node(NodeKind::ClassAttributes);
            p.retype(v[0], NodeKind::String);
            p.append_child(class_attributes, v[0]);
            class_attributes
        }

        // extends_from: T_EXTENDS fully_qualified_class_name
        85 => {
            p.retype(v[0], NodeKind::ExtendsList);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // interface_extends_list: T_EXTENDS interface_list
        88 => {
            p.retype(v[0], NodeKind::ExtendsList);
            p.append_children(v[0], v[1]);
            v[0]
        }

        // implements_list: T_IMPLEMENTS interface_list
        90 => {
            p.retype(v[0], NodeKind::ImplementsList);
            p.append_children(v[0], v[1]);
            v[0]
        }

        // interface_list: fully_qualified_class_name
        91 => {
            let implements_list = p.new_node(NodeKind::ImplementsList);
            p.append_child(implements_list, v[0]);
            implements_list
        }

        // foreach_optional_arg: T_DOUBLE_ARROW foreach_variable
        // dynamic_class_name_variable_property: T_OBJECT_OPERATOR object_property
        94 | 320 => v[1],

        // foreach_variable: '&' variable
        // argument: '&' w_variable
        96 | 150 => {
            p.retype(v[0], NodeKind::VariableReference);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // for_statement: ':' inner_statement_list T_ENDFOR ';'
        // foreach_statement: ':' inner_statement_list T_ENDFOREACH ';'
        // declare_statement: ':' inner_statement_list T_ENDDECLARE ';'
        98 | 100 | 102 => {
            p.expand(v[1], v[0]);
            p.expand(v[1], v[3]);
            v[1]
        }

        // declare_list: T_STRING '=' static_scalar
        103 => {
            let declare_declaration = p.new_node(NodeKind::DeclareDeclaration);
            p.retype(v[0], NodeKind::String);
            p.append_child(declare_declaration, v[0]);
            p.append_child(declare_declaration, v[2]);
            let declare_declaration_list = p.new_node(NodeKind::DeclareDeclarationList);
            p.append_child(declare_declaration_list, declare_declaration);
            declare_declaration_list
        }

        // declare_list: declare_list ',' T_STRING '=' static_scalar
        104 => {
            let declare_declaration = p.new_node(NodeKind::DeclareDeclaration);
            p.retype(v[2], NodeKind::String);
            p.append_child(declare_declaration, v[2]);
            p.append_child(declare_declaration, v[4]);
            p.append_child(v[0], declare_declaration);
            v[0]
        }

        // switch_case_list: '{' ';' case_list '}'
        106 => {
            p.retype(v[1], NodeKind::Statement);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            let statement_list = p.new_node(NodeKind::StatementList);
            p.append_child(statement_list, v[1]);
            p.append_children(statement_list, v[2]);
            p.enclose(v[0], statement_list, v[3]);
            statement_list
        }

        // switch_case_list: ':' case_list T_ENDSWITCH ';'
        // while_statement: ':' inner_statement_list T_ENDWHILE ';'
        107 | 115 => {
            p.expand(v[1], v[3]);
            p.expand(v[1], v[0]);
            v[1]
        }

        // switch_case_list: ':' ';' case_list T_ENDSWITCH ';'
        108 => {
            p.retype(v[1], NodeKind::Statement);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            let statement_list = p.new_node(NodeKind::StatementList);
            p.append_child(statement_list, v[1]);
            p.append_children(statement_list, v[2]);
            p.expand(statement_list, v[4]);
            p.expand(statement_list, v[0]);
            statement_list
        }

        // case_list: case_list T_CASE expr case_separator inner_statement_list
        110 => {
            p.retype(v[1], NodeKind::Case);
            p.append_child(v[1], v[2]);
            p.append_child(v[1], v[4]);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // case_list: case_list T_DEFAULT case_separator inner_statement_list
        111 => {
            p.retype(v[1], NodeKind::Default);
            p.append_child(v[1], v[3]);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // elseif_list: <empty>
        // new_elseif_list: <empty>
        116 | 118 => p.new_node(NodeKind::ConditionList),

        // elseif_list: elseif_list T_ELSEIF '(' expr ')' statement
        117 => {
            p.retype(v[1], NodeKind::Elseif);
            p.set_span(v[2], NodeKind::ControlCondition, v[4]);
            p.append_child(v[2], v[3]);
            p.append_child(v[1], v[2]);
            p.append_child(v[1], v[5]);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // new_elseif_list: new_elseif_list T_ELSEIF '(' expr ')' ':' inner_statement_list
        119 => {
            p.retype(v[1], NodeKind::Elseif);
            p.append_child(v[1], v[3]);
            p.append_child(v[1], v[6]);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // else_single: T_ELSE statement
        121 => {
            p.retype(v[0], NodeKind::Else);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // new_else_single: T_ELSE ':' inner_statement_list
        123 => {
            p.retype(v[0], NodeKind::Else);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // parameter_list: <empty>
        125 => p.new_node(NodeKind::DeclarationParameterList),

        // non_empty_parameter_list: optional_type parameter
        126 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[0]);
            p.append_child(declaration_parameter, v[1]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(declaration_parameter, empty);
            let declaration_parameter_list = p.new_node(NodeKind::DeclarationParameterList);
            p.append_child(declaration_parameter_list, declaration_parameter);
            declaration_parameter_list
        }

        // non_empty_parameter_list: optional_type '&' parameter
        127 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[0]);
            p.retype(v[1], NodeKind::VariableReference);
            p.append_child(declaration_parameter, v[1]);
            p.append_child(v[1], v[2]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(declaration_parameter, empty);
            let declaration_parameter_list = p.new_node(NodeKind::DeclarationParameterList);
            p.append_child(declaration_parameter_list, declaration_parameter);
            declaration_parameter_list
        }

        // non_empty_parameter_list: optional_type '&' parameter '=' static_scalar
        128 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[0]);
            p.retype(v[1], NodeKind::VariableReference);
            p.append_child(declaration_parameter, v[1]);
            p.append_child(v[1], v[2]);
            p.append_child(declaration_parameter, v[4]);
            let declaration_parameter_list = p.new_node(NodeKind::DeclarationParameterList);
            p.append_child(declaration_parameter_list, declaration_parameter);
            declaration_parameter_list
        }

        // non_empty_parameter_list: optional_type parameter '=' static_scalar
        129 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[0]);
            p.append_child(declaration_parameter, v[1]);
            p.append_child(declaration_parameter, v[3]);
            let declaration_parameter_list = p.new_node(NodeKind::DeclarationParameterList);
            p.append_child(declaration_parameter_list, declaration_parameter);
            declaration_parameter_list
        }

        // non_empty_parameter_list: non_empty_parameter_list ',' optional_type parameter
        130 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[2]);
            p.append_child(declaration_parameter, v[3]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(declaration_parameter, empty);
            p.append_child(v[0], declaration_parameter);
            v[0]
        }

        // non_empty_parameter_list: non_empty_parameter_list ',' optional_type '&' parameter
        131 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[2]);
            p.retype(v[3], NodeKind::VariableReference);
            p.append_child(declaration_parameter, v[3]);
            p.append_child(v[3], v[4]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(declaration_parameter, empty);
            p.append_child(v[0], declaration_parameter);
            v[0]
        }

        // non_empty_parameter_list: non_empty_parameter_list ',' optional_type '&' parameter '=' static_scalar
        132 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[2]);
            p.retype(v[3], NodeKind::VariableReference);
            p.append_child(declaration_parameter, v[3]);
            p.append_child(v[3], v[4]);
            p.append_child(declaration_parameter, v[6]);
            p.append_child(v[0], declaration_parameter);
            v[0]
        }

        // non_empty_parameter_list: non_empty_parameter_list ',' optional_type parameter '=' static_scalar
        133 => {
            let declaration_parameter = p.new_node(NodeKind::DeclarationParameter);
            p.append_child(declaration_parameter, v[2]);
            p.append_child(declaration_parameter, v[3]);
            p.append_child(declaration_parameter, v[5]);
            p.append_child(v[0], declaration_parameter);
            v[0]
        }

        // parameter: T_ELLIPSIS T_VARIABLE
        134 => {
            p.retype(v[0], NodeKind::Unpack);
            p.retype(v[1], NodeKind::Variable);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // parameter: T_VARIABLE
        // global_var: T_VARIABLE
        // compound_variable: T_VARIABLE
        135 | 153 | 395 => {
            p.retype(v[0], NodeKind::Variable);
            v[0]
        }

        // optional_type: '?' type
        138 => {
            let nullable_type = p.new_node(NodeKind::NullableType);
            p.append_child(nullable_type, v[1]);
            nullable_type
        }

        // type: fully_qualified_class_name
        // class_statement: trait_use_statement
        // trait_adaptation_list: non_empty_trait_adaptation_list
        // trait_method_reference: trait_method_reference_fully_qualified
        // dim_offset: expr
        139 | 164 | 173 | 182 | 398 => v[0],

        // type: T_ARRAY
        // type: T_CALLABLE
        140 | 141 => {
            p.retype(v[0], NodeKind::TypeName);
            v[0]
        }

        // return_type: ':' optional_type
        143 => {
            let declaration_return = p.new_node(NodeKind::DeclarationReturn);
            p.append_child(declaration_return, v[1]);
            declaration_return
        }

        // function_call_parameter_list: <empty>
        145 => p.new_node(NodeKind::CallParameterList),

        // non_empty_function_call_parameter_list: argument
        146 => {
            let call_parameter_list = p.new_node(NodeKind::CallParameterList);
            p.append_child(call_parameter_list, v[0]);
            call_parameter_list
        }

        // argument: T_ELLIPSIS expr
        149 => {
            p.retype(v[0], NodeKind::Unpack);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // global_var_list: global_var
        152 => {
            let global_declaration_list = p.new_node(NodeKind::GlobalDeclarationList);
            p.append_child(global_declaration_list, v[0]);
            global_declaration_list
        }

        // global_var: '$' r_variable
        154 => {
            p.retype(v[0], NodeKind::VariableVariable);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // global_var: '$' '{' expr '}'
        155 => {
            p.retype(v[0], NodeKind::VariableVariable);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // static_var_list: static_var_list ',' T_VARIABLE
        156 => {
            p.retype(v[2], NodeKind::Variable);
            let static_declaration = p.new_node(NodeKind::StaticDeclaration);
            p.append_child(static_declaration, v[2]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(static_declaration, empty);
            p.append_child(v[0], static_declaration);
            v[0]
        }

        // static_var_list: static_var_list ',' T_VARIABLE '=' static_scalar
        157 => {
            p.retype(v[2], NodeKind::Variable);
            let static_declaration = p.new_node(NodeKind::StaticDeclaration);
            p.append_child(static_declaration, v[2]);
            p.append_child(static_declaration, v[4]);
            p.append_child(v[0], static_declaration);
            v[0]
        }

        // static_var_list: T_VARIABLE
        158 => {
            p.retype(v[0], NodeKind::Variable);
            let static_declaration = p.new_node(NodeKind::StaticDeclaration);
            p.append_child(static_declaration, v[0]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(static_declaration, empty);
            let static_declaration_list = p.new_node(NodeKind::StaticDeclarationList);
            p.append_child(static_declaration_list, static_declaration);
            static_declaration_list
        }

        // static_var_list: T_VARIABLE '=' static_scalar
        159 => {
            p.retype(v[0], NodeKind::Variable);
            let static_declaration = p.new_node(NodeKind::StaticDeclaration);
            p.append_child(static_declaration, v[0]);
            p.append_child(static_declaration, v[2]);
            let static_declaration_list = p.new_node(NodeKind::StaticDeclarationList);
            p.append_child(static_declaration_list, static_declaration);
            static_declaration_list
        }

        // class_statement: variable_modifiers class_variable_declaration ';'
        162 => {
            let class_member_declaration_list = p.new_node(NodeKind::ClassMemberDeclarationList);
            p.append_child(class_member_declaration_list, v[0]);
            p.append_children(class_member_declaration_list, v[1]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, class_member_declaration_list);
            p.expand(statement, v[2]);
            statement
        }

        // class_statement: method_modifiers function @1 is_reference T_STRING '(' parameter_list ')' return_type method_body
        166 => {
            let method_declaration = p.new_node(NodeKind::MethodDeclaration);
            p.expand(method_declaration, v[1]);
            p.append_child(method_declaration, v[0]);
            p.append_child(method_declaration, v[3]);
            p.retype(v[4], NodeKind::String);
            p.append_child(method_declaration, v[4]);
            p.enclose(v[5], v[6], v[7]);
            p.append_child(method_declaration, v[6]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(method_declaration, empty);
            p.append_child(method_declaration, v[8]);
            p.append_child(method_declaration, v[9]);
            let statement = p.new_node(NodeKind::Statement);
            p.append_child(statement, method_declaration);
            statement
        }

        // trait_use_statement: T_USE trait_list trait_adaptations
        167 => {
            p.retype(v[0], NodeKind::TraitUse);
            p.append_children(v[0], v[1]);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // trait_list: fully_qualified_class_name
        168 => {
            let trait_use_list = p.new_node(NodeKind::TraitUseList);
            p.append_child(trait_use_list, v[0]);
            trait_use_list
        }

        // trait_adaptation_list: <empty>
        172 => p.new_node(NodeKind::TraitAdaptationList),

        // non_empty_trait_adaptation_list: trait_adaptation_statement
        174 => {
            let trait_adaptation_list = p.new_node(NodeKind::TraitAdaptationList);
            p.append_child(trait_adaptation_list, v[0]);
            trait_adaptation_list
        }

        // trait_adaptation_statement: trait_precedence ';'
        // trait_adaptation_statement: trait_alias ';'
        // static_array_pair_list: non_empty_static_array_pair_list possible_comma
        // array_pair_list: non_empty_array_pair_list possible_comma
        176 | 177 | 355 | 414 => {
            p.expand(v[0], v[1]);
            v[0]
        }

        // trait_precedence: trait_method_reference_fully_qualified T_INSTEADOF trait_reference_list
        178 => {
            let trait_insteadof = p.new_node(NodeKind::TraitInsteadof);
            p.append_child(trait_insteadof, v[0]);
            p.append_child(trait_insteadof, v[2]);
            trait_insteadof
        }

        // trait_reference_list: fully_qualified_class_name
        179 => {
            let trait_reference_list = p.new_node(NodeKind::TraitReferenceList);
            p.append_child(trait_reference_list, v[0]);
            trait_reference_list
        }

        // trait_method_reference: T_STRING
        181 => {
            let trait_method_reference = p.new_node(NodeKind::TraitMethodReference);
            p.retype(v[0], NodeKind::String);
            p.append_child(trait_method_reference, v[0]);
            trait_method_reference
        }

        // trait_method_reference_fully_qualified: fully_qualified_class_name T_PAAMAYIM_NEKUDOTAYIM T_STRING
        183 => {
            p.retype(v[1], NodeKind::TraitMethodReference);
            p.retype(v[2], NodeKind::String);
            p.enclose(v[0], v[1], v[2]);
            v[1]
        }

        // trait_alias: trait_method_reference T_AS trait_modifiers T_STRING
        184 => {
            let trait_as = p.new_node(NodeKind::TraitAs);
            p.append_child(trait_as, v[0]);
            p.append_child(trait_as, v[2]);
            p.retype(v[3], NodeKind::String);
            p.append_child(trait_as, v[3]);
            trait_as
        }

        // trait_alias: trait_method_reference T_AS member_modifier
        185 => {
            let trait_as = p.new_node(NodeKind::TraitAs);
            p.append_child(trait_as, v[0]);
            p.append_child(trait_as, v[2]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(trait_as, empty);
            trait_as
        }

        // trait_modifiers: member_modifier
        187 => {
            let method_modifier_list = p.new_node(NodeKind::MethodModifierList);
            p.append_child(method_modifier_list, v[0]);
            method_modifier_list
        }

        // variable_modifiers: T_VAR
        191 => {
            let class_member_modifier_list = p.new_node(NodeKind::ClassMemberModifierList);
            p.retype(v[0], NodeKind::String);
            p.append_child(class_member_modifier_list, v[0]);
            class_member_modifier_list
        }

        // method_modifiers: <empty>
        192 => p.new_node(NodeKind::MethodModifierList),

        // method_modifiers: non_empty_member_modifiers
        193 => {
            p.retype(v[0], NodeKind::MethodModifierList);
            v[0]
        }

        // non_empty_member_modifiers: member_modifier
        194 => {
            let class_member_modifier_list = p.new_node(NodeKind::ClassMemberModifierList);
            p.append_child(class_member_modifier_list, v[0]);
            class_member_modifier_list
        }

        // member_modifier: basic_member_modifier
        // variable_name: T_STRING
        196 | 404 => {
            p.retype(v[0], NodeKind::String);
            v[0]
        }

        // class_variable_declaration: class_variable_declaration ',' T_VARIABLE
        203 => {
            let class_member_declaration = p.new_node(NodeKind::ClassMemberDeclaration);
            p.retype(v[2], NodeKind::Variable);
            p.append_child(class_member_declaration, v[2]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(class_member_declaration, empty);
            p.append_child(v[0], class_member_declaration);
            v[0]
        }

        // class_variable_declaration: class_variable_declaration ',' T_VARIABLE '=' static_scalar
        204 => {
            let class_member_declaration = p.new_node(NodeKind::ClassMemberDeclaration);
            p.retype(v[2], NodeKind::Variable);
            p.append_child(class_member_declaration, v[2]);
            p.append_child(class_member_declaration, v[4]);
            p.append_child(v[0], class_member_declaration);
            v[0]
        }

        // class_variable_declaration: T_VARIABLE
        205 => {
            let class_member_declaration = p.new_node(NodeKind::ClassMemberDeclaration);
            p.retype(v[0], NodeKind::Variable);
            p.append_child(class_member_declaration, v[0]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(class_member_declaration, empty);
            let class_member_declaration_list = p.new_node(NodeKind::ClassMemberDeclarationList);
            p.append_child(class_member_declaration_list, class_member_declaration);
            class_member_declaration_list
        }

        // class_variable_declaration: T_VARIABLE '=' static_scalar
        206 => {
            let class_member_declaration = p.new_node(NodeKind::ClassMemberDeclaration);
            p.retype(v[0], NodeKind::Variable);
            p.append_child(class_member_declaration, v[0]);
            p.append_child(class_member_declaration, v[2]);
            let class_member_declaration_list = p.new_node(NodeKind::ClassMemberDeclarationList);
            p.append_child(class_member_declaration_list, class_member_declaration);
            class_member_declaration_list
        }

        // class_constant_declaration: class_constant_declaration ',' T_STRING '=' static_scalar
        207 => {
            let class_constant_declaration = p.new_node(NodeKind::ClassConstantDeclaration);
            p.retype(v[2], NodeKind::String);
            p.append_child(class_constant_declaration, v[2]);
            p.append_child(class_constant_declaration, v[4]);
            p.append_child(v[0], class_constant_declaration);
            v[0]
        }

        // class_constant_declaration: T_CONST T_STRING '=' static_scalar
        208 => {
            p.retype(v[0], NodeKind::ClassConstantDeclarationList);
            let class_constant_declaration = p.new_node(NodeKind::ClassConstantDeclaration);
            p.retype(v[1], NodeKind::String);
            p.append_child(class_constant_declaration, v[1]);
            p.append_child(class_constant_declaration, v[3]);
            p.append_child(v[0], class_constant_declaration);
            v[0]
        }

        // echo_expr_list: expr
        210 => {
            let echo_list = p.new_node(NodeKind::EchoList);
            p.append_child(echo_list, v[0]);
            echo_list
        }

        // non_empty_for_expr: expr
        214 => {
            let expression_list = p.new_node(NodeKind::ExpressionList);
            p.append_child(expression_list, v[0]);
            expression_list
        }

        // expr_without_variable: T_LIST '(' assignment_list ')' '=' expr
        215 => {
            p.retype(v[0], NodeKind::List);
            p.enclose(v[1], v[2], v[3]);
            p.append_child(v[0], v[2]);
            let binary_expression = p.new_node(NodeKind::BinaryExpression);
            p.append_child(binary_expression, v[0]);
            p.retype(v[4], NodeKind::Operator);
            p.append_child(binary_expression, v[4]);
            p.append_child(binary_expression, v[5]);
            binary_expression
        }

        // expr_without_variable: variable '=' expr
        // expr_without_variable: variable T_PLUS_EQUAL expr
        // expr_without_variable: variable T_MINUS_EQUAL expr
        // expr_without_variable: variable T_MUL_EQUAL expr
        // expr_without_variable: variable T_DIV_EQUAL expr
        // expr_without_variable: variable T_CONCAT_EQUAL expr
        // expr_without_variable: variable T_MOD_EQUAL expr
        // expr_without_variable: variable T_AND_EQUAL expr
        // expr_without_variable: variable T_OR_EQUAL expr
        // expr_without_variable: variable T_XOR_EQUAL expr
        // expr_without_variable: variable T_SL_EQUAL expr
        // expr_without_variable: variable T_SR_EQUAL expr
        // expr_without_variable: expr T_BOOLEAN_OR expr
        // expr_without_variable: expr T_BOOLEAN_AND expr
        // expr_without_variable: expr T_LOGICAL_OR expr
        // expr_without_variable: expr T_LOGICAL_AND expr
        // expr_without_variable: expr T_LOGICAL_XOR expr
        // expr_without_variable: expr '|' expr
        // expr_without_variable: expr '&' expr
        // expr_without_variable: expr '^' expr
        // expr_without_variable: expr '+' expr
        // expr_without_variable: expr '-' expr
        // expr_without_variable: expr '*' expr
        // expr_without_variable: expr '/' expr
        // expr_without_variable: expr '%' expr
        // expr_without_variable: expr T_SL expr
        // expr_without_variable: expr T_SR expr
        // expr_without_variable: expr T_IS_IDENTICAL expr
        // expr_without_variable: expr T_IS_NOT_IDENTICAL expr
        // expr_without_variable: expr T_IS_EQUAL expr
        // expr_without_variable: expr T_IS_NOT_EQUAL expr
        // expr_without_variable: expr '<' expr
        // expr_without_variable: expr T_IS_SMALLER_OR_EQUAL expr
        // expr_without_variable: expr '>' expr
        // expr_without_variable: expr T_IS_GREATER_OR_EQUAL expr
        // expr_without_variable: expr T_SPACESHIP expr
        // expr_without_variable: expr T_INSTANCEOF class_name_reference
        // expr_without_variable: expr T_COALESCE expr
        216 | 220 | 221 | 222 | 223 | 224 | 225 | 226 | 227 | 228 | 229 | 230 | 235 | 236 | 237 | 238 | 239 | 240 | 241 | 242 | 244 | 245 | 246 | 247 | 248 | 249 | 250 | 255 | 256 | 257 | 258 | 259 | 260 | 261 | 262 | 263 | 264 | 269 => {
            let binary_expression = p.new_node(NodeKind::BinaryExpression);
            p.append_child(binary_expression, v[0]);
            p.retype(v[1], NodeKind::Operator);
            p.append_child(binary_expression, v[1]);
            p.append_child(binary_expression, v[2]);
            binary_expression
        }

        // expr_without_variable: variable '=' '&' variable
        217 => {
            let binary_expression = p.new_node(NodeKind::BinaryExpression);
            p.append_child(binary_expression, v[0]);
            p.retype(v[1], NodeKind::Operator);
            p.append_child(binary_expression, v[1]);
            p.retype(v[2], NodeKind::VariableReference);
            p.append_child(v[2], v[3]);
            p.append_child(binary_expression, v[2]);
            binary_expression
        }

        // expr_without_variable: variable '=' '&' T_NEW class_name_reference ctor_arguments
        218 => {
            let binary_expression = p.new_node(NodeKind::BinaryExpression);
            p.append_child(binary_expression, v[0]);
            p.retype(v[1], NodeKind::Operator);
            p.append_child(binary_expression, v[1]);
            p.retype(v[3], NodeKind::New);
            p.append_child(v[3], v[4]);
            p.append_child(v[3], v[5]);
            p.retype(v[2], NodeKind::VariableReference);
            p.append_child(v[2], v[3]);
            p.append_child(binary_expression, v[2]);
            binary_expression
        }

        // expr_without_variable: T_CLONE expr
        // expr_without_variable: T_INC rw_variable
        // expr_without_variable: T_DEC rw_variable
        // expr_without_variable: '+' expr
        // expr_without_variable: '-' expr
        // expr_without_variable: '!' expr
        // expr_without_variable: '~' expr
        // expr_without_variable: T_EXIT exit_expr
        // expr_without_variable: '@' expr
        // expr_without_variable: T_PRINT expr
        // static_scalar: '+' static_scalar
        // static_scalar: '-' static_scalar
        219 | 232 | 234 | 251 | 252 | 253 | 254 | 278 | 279 | 284 | 342 | 343 => {
            let unary_prefix_expression = p.new_node(NodeKind::UnaryPrefixExpression);
            p.retype(v[0], NodeKind::Operator);
            p.append_child(unary_prefix_expression, v[0]);
            p.append_child(unary_prefix_expression, v[1]);
            unary_prefix_expression
        }

        // expr_without_variable: rw_variable T_INC
        // expr_without_variable: rw_variable T_DEC
        231 | 233 => {
            let unary_postfix_expression = p.new_node(NodeKind::UnaryPostfixExpression);
            p.append_child(unary_postfix_expression, v[0]);
            p.retype(v[1], NodeKind::Operator);
            p.append_child(unary_postfix_expression, v[1]);
            unary_postfix_expression
        }

        // expr_without_variable: expr '.' expr
        243 => {
            // `.` collects into a flat n_CONCATENATION_LIST rather than a binary
            // tree; long chains would otherwise nest one level per operand.
            p.retype(v[1], NodeKind::Operator);
            let lhs_flat = p.kind(v[0]) == NodeKind::ConcatenationList;
            let rhs_flat = p.kind(v[2]) == NodeKind::ConcatenationList;
            match (lhs_flat, rhs_flat) {
                (true, true) => {
                    p.append_child(v[0], v[1]);
                    p.append_children(v[0], v[2]);
                    v[0]
                }
                (true, false) => {
                    p.append_child(v[0], v[1]);
                    p.append_child(v[0], v[2]);
                    v[0]
                }
                (false, true) => {
                    let concatenation_list = p.new_node(NodeKind::ConcatenationList);
                    p.append_child(concatenation_list, v[0]);
                    p.append_child(concatenation_list, v[1]);
                    p.append_children(concatenation_list, v[2]);
                    concatenation_list
                }
                (false, false) => {
                    let concatenation_list = p.new_node(NodeKind::ConcatenationList);
                    p.append_child(concatenation_list, v[0]);
                    p.append_child(concatenation_list, v[1]);
                    p.append_child(concatenation_list, v[2]);
                    concatenation_list
                }
            }
        }

        // expr_without_variable: expr '?' expr ':' expr
        267 => {
            let ternary_expression = p.new_node(NodeKind::TernaryExpression);
            p.append_child(ternary_expression, v[0]);
            p.retype(v[1], NodeKind::Operator);
            p.append_child(ternary_expression, v[1]);
            p.append_child(ternary_expression, v[2]);
            p.retype(v[3], NodeKind::Operator);
            p.append_child(ternary_expression, v[3]);
            p.append_child(ternary_expression, v[4]);
            ternary_expression
        }

        // expr_without_variable: expr '?' ':' expr
        268 => {
            let ternary_expression = p.new_node(NodeKind::TernaryExpression);
            p.append_child(ternary_expression, v[0]);
            p.retype(v[1], NodeKind::Operator);
            p.append_child(ternary_expression, v[1]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(ternary_expression, empty);
            p.retype(v[2], NodeKind::Operator);
            p.append_child(ternary_expression, v[2]);
            p.append_child(ternary_expression, v[3]);
            ternary_expression
        }

        // expr_without_variable: T_INT_CAST expr
        // expr_without_variable: T_DOUBLE_CAST expr
        // expr_without_variable: T_STRING_CAST expr
        // expr_without_variable: T_ARRAY_CAST expr
        // expr_without_variable: T_OBJECT_CAST expr
        // expr_without_variable: T_BOOL_CAST expr
        // expr_without_variable: T_UNSET_CAST expr
        271 | 272 | 273 | 274 | 275 | 276 | 277 => {
            let cast_expression = p.new_node(NodeKind::CastExpression);
            p.retype(v[0], NodeKind::Cast);
            p.append_child(cast_expression, v[0]);
            p.append_child(cast_expression, v[1]);
            cast_expression
        }

        // expr_without_variable: T_BACKTICKS_EXPR
        280 => {
            p.retype(v[0], NodeKind::BackticksExpression);
            interpolation::attach(p, v[0]);
            v[0]
        }

        // expr_without_variable: T_YIELD
        285 => {
            p.retype(v[0], NodeKind::Yield);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            let empty2 = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty2);
            v[0]
        }

        // expr_without_variable: function is_reference '(' parameter_list ')' lexical_vars return_type '{' inner_statement_list '}'
        286 => {
            p.set_span(v[0], NodeKind::FunctionDeclaration, v[8]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty);
            p.append_child(v[0], v[1]);
            let empty2 = p.new_node(NodeKind::Empty);
            p.append_child(v[0], empty2);
            p.enclose(v[2], v[3], v[4]);
            p.append_child(v[0], v[3]);
            p.append_child(v[0], v[5]);
            p.append_child(v[0], v[6]);
            p.enclose(v[7], v[8], v[9]);
            p.append_child(v[0], v[8]);
            v[0]
        }

        // expr_without_variable: T_STATIC function is_reference '(' parameter_list ')' lexical_vars return_type '{' inner_statement_list '}'
        287 => {
            p.set_span(v[1], NodeKind::FunctionDeclaration, v[9]);
            p.expand(v[1], v[0]);
            let function_modifier_list = p.new_node(NodeKind::FunctionModifierList);
            p.retype(v[0], NodeKind::String);
            p.append_child(function_modifier_list, v[0]);
            p.append_child(v[1], v[0]);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[1], empty);
            p.append_child(v[1], v[2]);
            let empty2 = p.new_node(NodeKind::Empty);
            p.append_child(v[1], empty2);
            p.enclose(v[3], v[4], v[5]);
            p.append_child(v[1], v[4]);
            p.append_child(v[1], v[6]);
            p.append_child(v[1], v[7]);
            p.enclose(v[8], v[9], v[10]);
            p.append_child(v[1], v[9]);
            v[1]
        }

        // yield_expr: T_YIELD expr_without_variable
        // yield_expr: T_YIELD variable
        288 | 289 => {
            p.retype(v[0], NodeKind::Yield);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(v[1], empty);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // yield_expr: T_YIELD expr T_DOUBLE_ARROW expr_without_variable
        // yield_expr: T_YIELD expr T_DOUBLE_ARROW variable
        290 | 291 => {
            p.retype(v[0], NodeKind::Yield);
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[3]);
            v[0]
        }

        // lexical_vars: T_USE '(' lexical_var_list ')'
        294 => {
            p.retype(v[0], NodeKind::LexicalVariableList);
            p.append_children(v[0], v[2]);
            v[0]
        }

        // lexical_var_list: lexical_var_list ',' T_VARIABLE
        295 => {
            p.retype(v[2], NodeKind::Variable);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // lexical_var_list: lexical_var_list ',' '&' T_VARIABLE
        296 => {
            p.retype(v[2], NodeKind::VariableReference);
            p.retype(v[3], NodeKind::Variable);
            p.append_child(v[2], v[3]);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // lexical_var_list: T_VARIABLE
        297 => {
            let lexical_variable_list = p.new_node(NodeKind::LexicalVariableList);
            p.retype(v[0], NodeKind::Variable);
            p.append_child(lexical_variable_list, v[0]);
            lexical_variable_list
        }

        // lexical_var_list: '&' T_VARIABLE
        298 => {
            p.retype(v[0], NodeKind::VariableReference);
            p.retype(v[1], NodeKind::Variable);
            p.append_child(v[0], v[1]);
            let lexical_variable_list = p.new_node(NodeKind::LexicalVariableList);
            p.append_child(lexical_variable_list, v[0]);
            lexical_variable_list
        }

        // function_call: namespace_name '(' function_call_parameter_list ')'
        // function_call: variable_without_objects '(' function_call_parameter_list ')'
        299 | 306 => {
            let function_call = p.new_node(NodeKind::FunctionCall);
            p.append_child(function_call, v[0]);
            p.enclose(v[1], v[2], v[3]);
            p.append_child(function_call, v[2]);
            function_call
        }

        // function_call: T_NAMESPACE T_NS_SEPARATOR namespace_name '(' function_call_parameter_list ')'
        300 => {
            p.expand(v[2], v[0]);
            let function_call = p.new_node(NodeKind::FunctionCall);
            p.append_child(function_call, v[2]);
            p.enclose(v[3], v[4], v[5]);
            p.append_child(function_call, v[4]);
            function_call
        }

        // function_call: T_NS_SEPARATOR namespace_name '(' function_call_parameter_list ')'
        301 => {
            p.expand(v[1], v[0]);
            let function_call = p.new_node(NodeKind::FunctionCall);
            p.append_child(function_call, v[1]);
            p.enclose(v[2], v[3], v[4]);
            p.append_child(function_call, v[3]);
            function_call
        }

        // function_call: class_name T_PAAMAYIM_NEKUDOTAYIM T_STRING '(' function_call_parameter_list ')'
        // function_call: variable_class_name T_PAAMAYIM_NEKUDOTAYIM T_STRING '(' function_call_parameter_list ')'
        // function_call: variable_class_name T_PAAMAYIM_NEKUDOTAYIM variable_without_objects '(' function_call_parameter_list ')'
        // function_call: class_name T_PAAMAYIM_NEKUDOTAYIM variable_without_objects '(' function_call_parameter_list ')'
        302 | 303 | 304 | 305 => {
            let class_static_access = p.new_node(NodeKind::ClassStaticAccess);
            p.append_child(class_static_access, v[0]);
            p.retype(v[2], NodeKind::String);
            p.append_child(class_static_access, v[2]);
            let function_call = p.new_node(NodeKind::FunctionCall);
            p.append_child(function_call, class_static_access);
            p.enclose(v[3], v[4], v[5]);
            p.append_child(function_call, v[4]);
            function_call
        }

        // class_name: T_STATIC
        // class_name: namespace_name
        // fully_qualified_class_name: namespace_name
        307 | 308 | 311 => {
            p.retype(v[0], NodeKind::ClassName);
            v[0]
        }

        // class_name: T_NAMESPACE T_NS_SEPARATOR namespace_name
        // fully_qualified_class_name: T_NAMESPACE T_NS_SEPARATOR namespace_name
        309 | 312 => {
            p.expand(v[2], v[0]);
            p.retype(v[2], NodeKind::ClassName);
            v[2]
        }

        // class_name: T_NS_SEPARATOR namespace_name
        // fully_qualified_class_name: T_NS_SEPARATOR namespace_name
        310 | 313 => {
            p.expand(v[1], v[0]);
            p.retype(v[1], NodeKind::ClassName);
            v[1]
        }

        // dynamic_class_name_reference: base_variable T_OBJECT_OPERATOR object_property dynamic_class_name_variable_properties
        316 => {
            let mut access = p.new_node(NodeKind::ObjectPropertyAccess);
            p.append_child(access, v[0]);
            p.append_child(access, v[2]);
            let properties: Vec<NodeId> = p.children(v[3]).to_vec();
            for property in properties {
                let outer = p.new_node(NodeKind::ObjectPropertyAccess);
                p.append_child(outer, access);
                p.append_child(outer, property);
                access = outer;
            }
            access
        }

        // exit_expr: '(' ')'
        322 => {
            p.set_span(v[0], NodeKind::Empty, v[1]);
            v[0]
        }

        // exit_expr: '(' expr ')'
        // parenthesis_expr: '(' expr ')'
        323 | 432 => {
            p.set_span(v[0], NodeKind::ParentheticalExpression, v[2]);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // common_scalar: T_LNUMBER
        // common_scalar: T_DNUMBER
        326 | 327 => {
            p.retype(v[0], NodeKind::NumericScalar);
            v[0]
        }

        // common_scalar: T_CONSTANT_ENCAPSED_STRING
        328 => {
            p.retype(v[0], NodeKind::StringScalar);
            interpolation::attach(p, v[0]);
            v[0]
        }

        // common_scalar: T_LINE
        // common_scalar: T_FILE
        // common_scalar: T_DIR
        // common_scalar: T_CLASS_C
        // common_scalar: T_METHOD_C
        // common_scalar: T_TRAIT_C
        // common_scalar: T_FUNC_C
        // common_scalar: T_NS_C
        329 | 330 | 331 | 332 | 333 | 334 | 335 | 336 => {
            p.retype(v[0], NodeKind::MagicScalar);
            v[0]
        }

        // common_scalar: T_HEREDOC
        337 => {
            p.retype(v[0], NodeKind::Heredoc);
            interpolation::attach(p, v[0]);
            v[0]
        }

        // static_scalar: T_NAMESPACE T_NS_SEPARATOR namespace_name
        // scalar: T_NAMESPACE T_NS_SEPARATOR namespace_name
        340 | 351 => {
            p.expand(v[2], v[0]);
            v[2]
        }

        // static_scalar: T_NS_SEPARATOR namespace_name
        // scalar: T_NS_SEPARATOR namespace_name
        341 | 352 => {
            p.expand(v[1], v[0]);
            v[1]
        }

        // static_scalar: T_ARRAY '(' static_array_pair_list ')'
        // combined_scalar: T_ARRAY '(' array_pair_list ')'
        344 | 439 => {
            p.retype(v[0], NodeKind::ArrayLiteral);
            p.enclose(v[1], v[2], v[3]);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // static_scalar: '[' static_array_pair_list ']'
        // combined_scalar: '[' array_pair_list ']'
        345 | 440 => {
            p.retype(v[0], NodeKind::ArrayLiteral);
            p.enclose(v[0], v[1], v[2]);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // static_class_constant: class_name T_PAAMAYIM_NEKUDOTAYIM T_STRING
        // class_constant: class_name T_PAAMAYIM_NEKUDOTAYIM T_STRING
        // class_constant: variable_class_name T_PAAMAYIM_NEKUDOTAYIM T_STRING
        347 | 443 | 444 => {
            let class_static_access = p.new_node(NodeKind::ClassStaticAccess);
            p.append_child(class_static_access, v[0]);
            p.retype(v[2], NodeKind::String);
            p.append_child(class_static_access, v[2]);
            class_static_access
        }

        // static_array_pair_list: <empty>
        // array_pair_list: <empty>
        354 | 413 => p.new_node(NodeKind::ArrayValueList),

        // non_empty_static_array_pair_list: non_empty_static_array_pair_list ',' static_scalar T_DOUBLE_ARROW static_scalar
        // non_empty_array_pair_list: non_empty_array_pair_list ',' expr T_DOUBLE_ARROW expr
        358 | 415 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            p.append_child(array_value, v[2]);
            p.append_child(array_value, v[4]);
            p.append_child(v[0], array_value);
            v[0]
        }

        // non_empty_static_array_pair_list: non_empty_static_array_pair_list ',' static_scalar
        // non_empty_array_pair_list: non_empty_array_pair_list ',' expr
        359 | 416 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(array_value, empty);
            p.append_child(array_value, v[2]);
            p.append_child(v[0], array_value);
            v[0]
        }

        // non_empty_static_array_pair_list: static_scalar T_DOUBLE_ARROW static_scalar
        // non_empty_array_pair_list: expr T_DOUBLE_ARROW expr
        360 | 417 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            p.append_child(array_value, v[0]);
            p.append_child(array_value, v[2]);
            let array_value_list = p.new_node(NodeKind::ArrayValueList);
            p.append_child(array_value_list, array_value);
            array_value_list
        }

        // non_empty_static_array_pair_list: static_scalar
        // non_empty_array_pair_list: expr
        361 | 418 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(array_value, empty);
            p.append_child(array_value, v[0]);
            let array_value_list = p.new_node(NodeKind::ArrayValueList);
            p.append_child(array_value_list, array_value);
            array_value_list
        }

        // variable: base_variable_with_function_calls T_OBJECT_OPERATOR object_property method_or_not variable_properties
        367 => {
            let mut access = p.new_node(NodeKind::ObjectPropertyAccess);
            p.append_child(access, v[0]);
            p.append_child(access, v[2]);
            if p.kind(v[3]) != NodeKind::Empty {
                let call = p.new_node(NodeKind::MethodCall);
                p.append_child(call, access);
                p.append_child(call, v[3]);
                access = call;
            }
            let properties: Vec<NodeId> = p.children(v[4]).to_vec();
            for property in properties {
                let outer = if p.kind(property) == NodeKind::CallParameterList {
                    p.new_node(NodeKind::MethodCall)
                } else {
                    p.new_node(NodeKind::ObjectPropertyAccess)
                };
                p.append_child(outer, access);
                p.append_child(outer, property);
                access = outer;
            }
            access
        }

        // variable_properties: variable_properties variable_property
        369 => {
            p.append_children(v[0], v[1]);
            v[0]
        }

        // variable_property: T_OBJECT_OPERATOR object_property method_or_not
        371 => {
            let wrapper = p.new_node(NodeKind::Empty);
            p.append_child(wrapper, v[1]);
            if p.kind(v[2]) != NodeKind::Empty {
                p.append_child(wrapper, v[2]);
            }
            wrapper
        }

        // array_method_dereference: array_method_dereference '[' dim_offset ']'
        // array_method_dereference: method '[' dim_offset ']'
        // array_function_dereference: array_function_dereference '[' dim_offset ']'
        // array_function_dereference: function_call '[' dim_offset ']'
        // reference_variable: reference_variable '[' dim_offset ']'
        // reference_variable: reference_variable '{' expr '}'
        // object_dim_list: object_dim_list '[' dim_offset ']'
        // object_dim_list: object_dim_list '{' expr '}'
        // combined_scalar_offset: combined_scalar '[' dim_offset ']'
        // combined_scalar_offset: combined_scalar_offset '[' dim_offset ']'
        // combined_scalar_offset: class_constant '[' dim_offset ']'
        372 | 373 | 383 | 384 | 392 | 393 | 401 | 402 | 434 | 435 | 437 => {
            let index_access = p.new_node(NodeKind::IndexAccess);
            p.append_child(index_access, v[0]);
            p.append_child(index_access, v[2]);
            p.expand(index_access, v[3]);
            index_access
        }

        // variable_without_objects: simple_indirect_reference reference_variable
        // base_variable: simple_indirect_reference reference_variable
        379 | 390 => {
            p.expand(v[0], v[1]);
            let mut last = v[0];
            loop {
                match p.first_child(last) {
                    Some(child) if p.kind(child) == NodeKind::VariableVariable => {
                        p.expand(last, v[1]);
                        last = child;
                    }
                    _ => break,
                }
            }
            p.append_child(last, v[1]);
            v[0]
        }

        // static_member: class_name T_PAAMAYIM_NEKUDOTAYIM variable_without_objects
        // static_member: variable_class_name T_PAAMAYIM_NEKUDOTAYIM variable_without_objects
        380 | 381 => {
            let class_static_access = p.new_node(NodeKind::ClassStaticAccess);
            p.append_child(class_static_access, v[0]);
            p.append_child(class_static_access, v[2]);
            class_static_access
        }

        // compound_variable: '$' '{' expr '}'
        396 => {
            p.set_span(v[0], NodeKind::VariableExpression, v[3]);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // simple_indirect_reference: '$'
        406 => {
            p.retype(v[0], NodeKind::VariableVariable);
            v[0]
        }

        // simple_indirect_reference: simple_indirect_reference '$'
        407 => {
            p.retype(v[1], NodeKind::VariableVariable);
            let mut last = v[0];
            loop {
                match p.first_child(last) {
                    Some(child) if p.kind(child) == NodeKind::VariableVariable => last = child,
                    _ => break,
                }
            }
            p.append_child(last, v[1]);
            v[0]
        }

        // assignment_list: assignment_list_element
        409 => {
            let assignment_list = p.new_node(NodeKind::AssignmentList);
            p.append_child(assignment_list, v[0]);
            assignment_list
        }

        // assignment_list_element: T_LIST '(' assignment_list ')'
        411 => {
            let list = p.new_node(NodeKind::List);
            p.enclose(v[1], v[2], v[3]);
            p.append_child(list, v[2]);
            list
        }

        // non_empty_array_pair_list: non_empty_array_pair_list ',' expr T_DOUBLE_ARROW '&' w_variable
        419 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            p.append_child(array_value, v[2]);
            p.retype(v[4], NodeKind::VariableReference);
            p.append_child(v[4], v[5]);
            p.append_child(array_value, v[4]);
            p.append_child(v[0], array_value);
            v[0]
        }

        // non_empty_array_pair_list: non_empty_array_pair_list ',' '&' w_variable
        420 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(array_value, empty);
            p.retype(v[2], NodeKind::VariableReference);
            p.append_child(v[2], v[3]);
            p.append_child(array_value, v[2]);
            p.append_child(v[0], array_value);
            v[0]
        }

        // non_empty_array_pair_list: expr T_DOUBLE_ARROW '&' w_variable
        421 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            p.append_child(array_value, v[0]);
            p.retype(v[2], NodeKind::VariableReference);
            p.append_child(v[2], v[3]);
            p.append_child(array_value, v[2]);
            let array_value_list = p.new_node(NodeKind::ArrayValueList);
            p.append_child(array_value_list, array_value);
            array_value_list
        }

        // non_empty_array_pair_list: '&' w_variable
        422 => {
            let array_value = p.new_node(NodeKind::ArrayValue);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(array_value, empty);
            p.retype(v[0], NodeKind::VariableReference);
            p.append_child(v[0], v[1]);
            p.append_child(array_value, v[0]);
            let array_value_list = p.new_node(NodeKind::ArrayValueList);
            p.append_child(array_value_list, array_value);
            array_value_list
        }

        // internal_functions_in_yacc: T_ISSET '(' isset_variables ')'
        423 => {
            p.retype(v[0], NodeKind::SymbolName);
            p.set_span(v[1], NodeKind::CallParameterList, v[3]);
            p.append_children(v[1], v[2]);
            let function_call = p.new_node(NodeKind::FunctionCall);
            p.append_child(function_call, v[0]);
            p.append_child(function_call, v[1]);
            function_call
        }

        // internal_functions_in_yacc: T_EMPTY '(' variable ')'
        // internal_functions_in_yacc: T_EVAL '(' expr ')'
        424 | 427 => {
            p.retype(v[0], NodeKind::SymbolName);
            p.set_span(v[1], NodeKind::CallParameterList, v[3]);
            p.append_child(v[1], v[2]);
            let function_call = p.new_node(NodeKind::FunctionCall);
            p.append_child(function_call, v[0]);
            p.append_child(function_call, v[1]);
            function_call
        }

        // internal_functions_in_yacc: T_INCLUDE expr
        // internal_functions_in_yacc: T_INCLUDE_ONCE expr
        // internal_functions_in_yacc: T_REQUIRE expr
        // internal_functions_in_yacc: T_REQUIRE_ONCE expr
        425 | 426 | 428 | 429 => {
            p.retype(v[0], NodeKind::IncludeFile);
            p.append_child(v[0], v[1]);
            v[0]
        }

        // isset_variables: variable
        430 => {
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(empty, v[0]);
            empty
        }

        // combined_scalar_offset: T_CONSTANT_ENCAPSED_STRING '[' dim_offset ']'
        436 => {
            let index_access = p.new_node(NodeKind::IndexAccess);
            p.retype(v[0], NodeKind::StringScalar);
            p.append_child(index_access, v[0]);
            p.append_child(index_access, v[2]);
            p.expand(index_access, v[3]);
            interpolation::attach(p, v[0]);
            index_access
        }

        // combined_scalar_offset: T_STRING '[' dim_offset ']'
        438 => {
            let index_access = p.new_node(NodeKind::IndexAccess);
            p.retype(v[0], NodeKind::String);
            p.append_child(index_access, v[0]);
            p.append_child(index_access, v[2]);
            p.expand(index_access, v[3]);
            index_access
        }

        // new_expr: T_NEW class_name_reference ctor_arguments
        441 => {
            p.retype(v[0], NodeKind::New);
            p.append_child(v[0], v[1]);
            p.append_child(v[0], v[2]);
            v[0]
        }

        // new_expr: T_NEW T_CLASS ctor_arguments extends_from implements_list '{' class_statement_list '}'
        442 => {
            let class_declaration = p.new_node(NodeKind::ClassDeclaration);
            let empty = p.new_node(NodeKind::Empty);
            p.append_child(class_declaration, empty);
            let empty2 = p.new_node(NodeKind::Empty);
            p.append_child(class_declaration, empty2);
            p.append_child(class_declaration, v[3]);
            p.append_child(class_declaration, v[4]);
            p.enclose(v[5], v[6], v[7]);
            p.append_child(class_declaration, v[6]);
            p.expand(class_declaration, v[7]);
            p.retype(v[0], NodeKind::New);
            p.append_child(v[0], class_declaration);
            p.append_child(v[0], v[2]);
            v[0]
        }

        _ => v[0],
    }
}
