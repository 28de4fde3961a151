use crate::common::*;
use crate::ops::BinaryOperator;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_int(&mut self, x: &Int) -> Self::Output;

    fn visit_float(&mut self, x: &Float) -> Self::Output;

    fn visit_parenthetical(&mut self, p: &ast::Node) -> Self::Output;

    fn visit_binary(&mut self, l: &ast::Node, op: &BinaryOperator, r: &ast::Node) -> Self::Output;

    fn visit_call(&mut self, call: &ast::Call) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Expression {
    fn accept(&self, v: &mut V) -> V::Output {
        v.visit(&self.root)
    }
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Node {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::LiteralInt(x) => v.visit_int(x),
            Self::LiteralFloat(x) => v.visit_float(x),
            Self::Parenthetical(x) => v.visit_parenthetical(x),
            Self::Binary(l, op, r) => v.visit_binary(l, op, r),
            Self::Call(call) => v.visit_call(call),
        }
    }
}
