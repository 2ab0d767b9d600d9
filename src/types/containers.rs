use crate::{
    ast::Selection,
    executor::{ExecutionResult, Executor},
    types::base::GraphQLValue,
    value::{ScalarValue, Value},
};

impl<S, T> GraphQLValue<S> for Option<T>
where
    T: GraphQLValue<S>,
    S: ScalarValue,
{
    fn type_name(&self) -> Option<&str> {
        self.as_ref().and_then(T::type_name)
    }

    fn resolve(
        &self,
        _: Option<&[Selection<S>]>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        match self {
            Some(obj) => executor.resolve(obj),
            None => Ok(Value::null()),
        }
    }
}

impl<S, T> GraphQLValue<S> for Vec<T>
where
    T: GraphQLValue<S>,
    S: ScalarValue,
{
    fn resolve(
        &self,
        _: Option<&[Selection<S>]>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        resolve_into_list(executor, self.iter())
    }
}

impl<S, T> GraphQLValue<S> for [T]
where
    T: GraphQLValue<S>,
    S: ScalarValue,
{
    fn resolve(
        &self,
        _: Option<&[Selection<S>]>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        resolve_into_list(executor, self.iter())
    }
}

fn resolve_into_list<'t, S, T, I>(executor: &Executor<S>, iter: I) -> ExecutionResult<S>
where
    S: ScalarValue,
    I: Iterator<Item = &'t T> + ExactSizeIterator,
    T: GraphQLValue<S> + ?Sized + 't,
{
    let mut result = Vec::with_capacity(iter.len());
    for o in iter {
        result.push(executor.resolve(o)?);
    }
    Ok(Value::list(result))
}

#[cfg(test)]
mod tests {
    use crate::{DefaultScalarValue, Executor, Value, tests::fixtures::blog_schema};

    #[test]
    fn resolves_lists_and_options_of_leaves() {
        let schema = blog_schema();
        let executor = Executor::<DefaultScalarValue>::new(&schema, None);

        assert_eq!(
            executor.resolve(&vec![Some("a"), None]),
            Ok(Value::list(vec![Value::scalar("a"), Value::null()])),
        );
        assert_eq!(executor.resolve(&Vec::<bool>::new()), Ok(Value::list(vec![])));
    }
}
