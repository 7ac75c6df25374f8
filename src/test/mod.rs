//! 测试工具
//!
//! [`kassert!`](crate::kassert) 记录失败的条件但不展开栈，一个测试用例可一次报告所有失败。
//! [`test_case!`](crate::test_case) 把测试体包装成 `#[test]` 函数，结束时打印记录的失败，
//! 有失败则让测试失败。
