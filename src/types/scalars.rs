use arcstr::ArcStr;

use crate::{
    ast::Selection,
    executor::{ExecutionResult, Executor},
    types::base::GraphQLValue,
    value::{ScalarValue, Value},
};

impl<S: ScalarValue> GraphQLValue<S> for str {
    fn type_name(&self) -> Option<&str> {
        Some("String")
    }

    fn resolve(&self, _: Option<&[Selection<S>]>, _: &Executor<S>) -> ExecutionResult<S> {
        Ok(Value::scalar(self.to_owned()))
    }
}

impl<S: ScalarValue> GraphQLValue<S> for String {
    fn type_name(&self) -> Option<&str> {
        Some("String")
    }

    fn resolve(&self, _: Option<&[Selection<S>]>, _: &Executor<S>) -> ExecutionResult<S> {
        Ok(Value::scalar(self.clone()))
    }
}

impl<S: ScalarValue> GraphQLValue<S> for ArcStr {
    fn type_name(&self) -> Option<&str> {
        Some("String")
    }

    fn resolve(&self, _: Option<&[Selection<S>]>, _: &Executor<S>) -> ExecutionResult<S> {
        Ok(Value::scalar(self.to_string()))
    }
}

impl<S: ScalarValue> GraphQLValue<S> for bool {
    fn type_name(&self) -> Option<&str> {
        Some("Boolean")
    }

    fn resolve(&self, _: Option<&[Selection<S>]>, _: &Executor<S>) -> ExecutionResult<S> {
        Ok(Value::scalar(*self))
    }
}
