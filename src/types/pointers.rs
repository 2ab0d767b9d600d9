use crate::{
    ast::Selection,
    executor::{ExecutionResult, Executor},
    types::base::{Arguments, GraphQLValue},
    value::ScalarValue,
};

impl<S, T> GraphQLValue<S> for Box<T>
where
    T: GraphQLValue<S> + ?Sized,
    S: ScalarValue,
{
    fn type_name(&self) -> Option<&str> {
        (**self).type_name()
    }

    fn resolve_field(
        &self,
        field: &str,
        args: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        (**self).resolve_field(field, args, executor)
    }

    fn resolve(
        &self,
        selection_set: Option<&[Selection<S>]>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        (**self).resolve(selection_set, executor)
    }
}

impl<S, T> GraphQLValue<S> for &T
where
    T: GraphQLValue<S> + ?Sized,
    S: ScalarValue,
{
    fn type_name(&self) -> Option<&str> {
        (**self).type_name()
    }

    fn resolve_field(
        &self,
        field: &str,
        args: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        (**self).resolve_field(field, args, executor)
    }

    fn resolve(
        &self,
        selection_set: Option<&[Selection<S>]>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        (**self).resolve(selection_set, executor)
    }
}
